//! A minimal hand-written lexer, giving `nuua_core::parse` a real
//! source-text entry point that hands the emitter an AST to work with.

use crate::error::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
    Print,
    Return,
    If,
    Else,
    While,
    Fn,
    True,
    False,
    Nil,
    Colon,
    Comma,
    Arrow,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Assign,
    EqEq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Newline,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_inline_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') => {
                    self.pos += 1;
                }
                Some(b'#') => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_inline_whitespace_and_comments();

        let line = self.line;
        let Some(c) = self.advance() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
            });
        };

        let kind = match c {
            b'\n' => {
                self.line += 1;
                TokenKind::Newline
            }
            b':' => TokenKind::Colon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'+' => TokenKind::Plus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'-' => {
                if self.peek() == Some(b'>') {
                    self.pos += 1;
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            b'<' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::Lte
                } else {
                    TokenKind::Lt
                }
            }
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.pos += 1;
                    TokenKind::Gte
                } else {
                    TokenKind::Gt
                }
            }
            b'"' => return self.string(line),
            b'0'..=b'9' => return self.number(line),
            c if c.is_ascii_alphabetic() || c == b'_' => return self.ident_or_keyword(line),
            other => {
                return Err(CompileError::UnexpectedCharacter {
                    line,
                    found: other as char,
                })
            }
        };

        Ok(Token { kind, line })
    }

    fn string(&mut self, line: u32) -> Result<Token, CompileError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == b'"' {
                break;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
        if self.peek() != Some(b'"') {
            return Err(CompileError::UnexpectedEof {
                expected: "closing '\"'",
            });
        }
        let text = std::str::from_utf8(&self.source[start..self.pos])
            .unwrap_or_default()
            .to_string();
        self.pos += 1; // closing quote
        Ok(Token {
            kind: TokenKind::Str(text),
            line,
        })
    }

    fn number(&mut self, line: u32) -> Result<Token, CompileError> {
        let start = self.pos - 1;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let mut is_float = false;
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            is_float = true;
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap_or_default();
        let kind = if is_float {
            TokenKind::Float(text.parse().unwrap_or_default())
        } else {
            TokenKind::Int(text.parse().unwrap_or_default())
        };
        Ok(Token { kind, line })
    }

    fn ident_or_keyword(&mut self, line: u32) -> Result<Token, CompileError> {
        let start = self.pos - 1;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap_or_default();
        let kind = match text {
            "print" => TokenKind::Print,
            "return" => TokenKind::Return,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "fn" => TokenKind::Fn,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            other => TokenKind::Ident(other.to_string()),
        };
        Ok(Token { kind, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_print_statement() {
        let tokens = Lexer::new("print 1 + 2").tokenize().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                TokenKind::Print,
                TokenKind::Int(1),
                TokenKind::Plus,
                TokenKind::Int(2),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn distinguishes_arrow_from_minus() {
        let tokens = Lexer::new("-> -").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Arrow);
        assert_eq!(tokens[1].kind, TokenKind::Minus);
    }
}

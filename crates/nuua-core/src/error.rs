//! A plain, hand-rolled error enum (`Display` impl, no `thiserror`) for
//! every fatal condition the lexer, parser, or emitter can raise. There are
//! no recoverable errors at this layer: compilation either completes or is
//! abandoned.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The lexer found a character sequence it doesn't recognize.
    UnexpectedCharacter { line: u32, found: char },
    /// The parser expected one grammar rule and found a different token.
    UnexpectedToken {
        line: u32,
        expected: &'static str,
        found: String,
    },
    /// Source ended mid-construct.
    UnexpectedEof { expected: &'static str },
    /// `if` with a non-empty else branch — parsed, but there is no opcode
    /// sequence this emitter produces for it yet.
    UnsupportedIfElse { line: u32 },
    /// A back-patch targeted a constant-pool index outside the pool it was
    /// meant to overwrite. Always indicates a bug in the emitter itself
    /// (the index given to [`crate::region::MemoryRegion::patch_constant`]
    /// should always come from a placeholder reserved earlier in the same
    /// region), never a malformed input program.
    PatchOutOfRange { index: usize, pool_len: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnexpectedCharacter { line, found } => {
                write!(f, "line {line}: unexpected character '{found}'")
            }
            CompileError::UnexpectedToken {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected}, found '{found}'"),
            CompileError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of source, expected {expected}")
            }
            CompileError::UnsupportedIfElse { line } => write!(
                f,
                "line {line}: `if` with an else branch is not implemented"
            ),
            CompileError::PatchOutOfRange { index, pool_len } => write!(
                f,
                "back-patch index {index} out of range for a constants pool of length {pool_len}"
            ),
        }
    }
}

impl std::error::Error for CompileError {}

pub type CompileResult<T> = Result<T, CompileError>;

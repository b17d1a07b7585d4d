//! The closed AST node types produced by the upstream parser and consumed
//! by the emitter: a tagged sum over statement and expression variants,
//! dispatched with exhaustive pattern matching so adding a new node kind is
//! a compile-time obligation at every match site rather than a runtime
//! surprise.

use crate::value::TypeTag;

pub type Line = u32;

/// The lexical operator tokens the emitter's second-level dispatch
/// recognizes. Binary and logical expressions share this same closed set —
/// there is no separate `and`/`or` opcode in the target alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Assign,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// `name: T [= init]`. Doubles as both a declaration statement and a
/// function parameter — a parameter is just a declaration with no
/// initializer.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub type_tag: TypeTag,
    pub initializer: Option<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Print(Expr, Line),
    ExpressionStatement(Expr, Line),
    Declaration(Declaration),
    Return(Expr, Line),
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        /// Parsed, but not emittable: the emitter rejects any `If` carrying
        /// a `Some` here rather than silently dropping it or falling
        /// through to the then-branch. Carried through the AST instead of
        /// being rejected in the parser so the distinction is visible at
        /// the point that actually can't handle it.
        else_branch: Option<Vec<Stmt>>,
        line: Line,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        line: Line,
    },
}

#[derive(Debug, Clone)]
pub enum Expr {
    Int(i64, Line),
    Float(f64, Line),
    Str(String, Line),
    Bool(bool, Line),
    Nil(Line),
    List(Vec<Expr>, Line),
    /// Pairs are carried in the AST's own insertion order — never sourced
    /// from a hash map — so emission order matches source order.
    Dictionary(Vec<(String, Expr)>, Line),
    Group(Box<Expr>, Line),
    Unary {
        op: Operator,
        operand: Box<Expr>,
        line: Line,
    },
    /// Binary arithmetic/comparison and logical expressions share this one
    /// variant; both emit left, then right, then the operator.
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
        line: Line,
    },
    Variable(String, Line),
    Assign {
        name: String,
        value: Box<Expr>,
        line: Line,
    },
    IndexAssign {
        container: String,
        index: Box<Expr>,
        value: Box<Expr>,
        line: Line,
    },
    Access {
        container: String,
        index: Box<Expr>,
        line: Line,
    },
    Function {
        params: Vec<Declaration>,
        return_type: TypeTag,
        body: Vec<Stmt>,
        line: Line,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
        line: Line,
    },
}

impl Expr {
    pub fn line(&self) -> Line {
        match self {
            Expr::Int(_, l)
            | Expr::Float(_, l)
            | Expr::Str(_, l)
            | Expr::Bool(_, l)
            | Expr::Nil(l)
            | Expr::List(_, l)
            | Expr::Dictionary(_, l)
            | Expr::Group(_, l)
            | Expr::Variable(_, l) => *l,
            Expr::Unary { line, .. }
            | Expr::Binary { line, .. }
            | Expr::Assign { line, .. }
            | Expr::IndexAssign { line, .. }
            | Expr::Access { line, .. }
            | Expr::Function { line, .. }
            | Expr::Call { line, .. } => *line,
        }
    }
}

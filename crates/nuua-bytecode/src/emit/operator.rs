//! Second-level dispatch: lexical operator tokens to opcodes.
//!
//! [`nuua_core::ast::Operator`] is a closed enum, so every arm below is
//! reachable and total — there is no "any other token" catch-all to write.
//! `Operator::Assign` (the `=` token mapped to `STORE`) has no expression
//! node that constructs it: assignment is its own AST variant with a
//! dedicated emission path (see [`crate::emit::expr`]). The arm is kept for
//! fidelity with the full operator table rather than deleted as dead code.

use nuua_core::ast::Operator;
use nuua_core::opcode::Opcode;

/// `is_unary` disambiguates `-` (`SUB` vs `MINUS`); every other token maps
/// to the same opcode regardless of position.
pub fn opcode_for(op: Operator, is_unary: bool) -> Opcode {
    match (op, is_unary) {
        (Operator::Plus, _) => Opcode::Add,
        (Operator::Minus, true) => Opcode::Minus,
        (Operator::Minus, false) => Opcode::Sub,
        (Operator::Star, _) => Opcode::Mul,
        (Operator::Slash, _) => Opcode::Div,
        (Operator::Bang, _) => Opcode::Not,
        (Operator::Assign, _) => Opcode::Store,
        (Operator::Eq, _) => Opcode::Eq,
        (Operator::Neq, _) => Opcode::Neq,
        (Operator::Lt, _) => Opcode::Lt,
        (Operator::Lte, _) => Opcode::Lte,
        (Operator::Gt, _) => Opcode::Ht,
        (Operator::Gte, _) => Opcode::Hte,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_is_context_sensitive() {
        assert_eq!(opcode_for(Operator::Minus, true), Opcode::Minus);
        assert_eq!(opcode_for(Operator::Minus, false), Opcode::Sub);
    }

    #[test]
    fn comparisons_ignore_the_unary_flag() {
        assert_eq!(opcode_for(Operator::Gte, true), Opcode::Hte);
        assert_eq!(opcode_for(Operator::Gte, false), Opcode::Hte);
    }
}

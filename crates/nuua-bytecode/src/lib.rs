//! The AST-to-bytecode emitter: the recursive walker that turns a parsed
//! statement list into a finalized [`nuua_core::program::Program`] for the
//! runtime VM to execute.

mod compiler;
pub mod disassemble;
mod emit;

pub use compiler::Compiler;

use nuua_core::ast::Stmt;
use nuua_core::error::CompileResult;
use nuua_core::program::Program;

/// Parses and emits `source` in one call: `compile(source) -> Program`.
pub fn compile(source: &str) -> CompileResult<Program> {
    let statements = nuua_core::parse(source)?;
    compile_ast(&statements)
}

/// Emits an already-parsed statement list, skipping the lexer/parser step —
/// useful for callers that built or transformed an AST directly.
pub fn compile_ast(statements: &[Stmt]) -> CompileResult<Program> {
    let mut compiler = Compiler::new();
    compiler.compile(statements)?;
    Ok(compiler.into_program())
}

//! Statement emission: one dispatch arm per AST statement variant, plus the
//! `if`/`while` back-patching that resolves a branch's jump distance once
//! its target address is known.

use nuua_core::ast::{Declaration, Stmt};
use nuua_core::error::{CompileError, CompileResult};
use nuua_core::opcode::Opcode;
use nuua_core::value::Value;

use crate::compiler::Compiler;
use crate::emit::expr;

pub fn emit_statement(compiler: &mut Compiler, statement: &Stmt) -> CompileResult<()> {
    match statement {
        Stmt::Print(value, line) => {
            compiler.set_current_line(*line);
            expr::emit_expression(compiler, value)?;
            compiler.region_mut().emit_op(Opcode::Print, *line);
            Ok(())
        }

        Stmt::ExpressionStatement(value, line) => {
            compiler.set_current_line(*line);
            expr::emit_expression(compiler, value)?;
            compiler.region_mut().emit_op(Opcode::Pop, *line);
            Ok(())
        }

        Stmt::Declaration(decl) => {
            compiler.set_current_line(decl.line);
            emit_declaration(compiler, decl)?;
            if let Some(initializer) = &decl.initializer {
                expr::emit_expression(compiler, initializer)?;
                compiler.region_mut().emit_op(Opcode::Store, decl.line);
                compiler
                    .region_mut()
                    .emit_constant_only(Value::Str(decl.name.clone()), decl.line);
                compiler.region_mut().emit_op(Opcode::Pop, decl.line);
            }
            Ok(())
        }

        Stmt::Return(value, line) => {
            compiler.set_current_line(*line);
            expr::emit_expression(compiler, value)?;
            compiler.region_mut().emit_op(Opcode::Return, *line);
            Ok(())
        }

        Stmt::If {
            condition,
            then_branch,
            else_branch,
            line,
        } => {
            if else_branch.is_some() {
                // The parser accepts an `else` clause, but nothing downstream
                // of it exists yet: there is no opcode sequence this emitter
                // produces for the else arm, so reject it here rather than
                // silently dropping it or falling through to the then-branch.
                return Err(CompileError::UnsupportedIfElse { line: *line });
            }
            compiler.set_current_line(*line);
            expr::emit_expression(compiler, condition)?;
            compiler.region_mut().emit_op(Opcode::BranchFalse, *line);
            let patch_index = compiler.region_mut().emit_placeholder(*line);
            let recorded_length = compiler.region().current_code_length();

            for statement in then_branch {
                emit_statement(compiler, statement)?;
            }

            let offset = compiler.region().current_code_length() as i64 - recorded_length as i64;
            compiler
                .region_mut()
                .patch_constant(patch_index, Value::Int(offset))?;
            Ok(())
        }

        Stmt::While {
            condition,
            body,
            line,
        } => {
            compiler.set_current_line(*line);
            let loop_head = compiler.region().current_code_length();
            expr::emit_expression(compiler, condition)?;
            compiler.region_mut().emit_op(Opcode::BranchFalse, *line);
            let exit_patch_index = compiler.region_mut().emit_placeholder(*line);
            let body_start = compiler.region().current_code_length();

            for statement in body {
                emit_statement(compiler, statement)?;
            }

            // The back-jump offset counts as though the RJUMP instruction
            // (opcode + operand, two slots) has already been fully emitted,
            // since the VM's PC will have advanced past both by the time it
            // takes the jump.
            let code_length_before_rjump = compiler.region().current_code_length();
            compiler.region_mut().emit_op(Opcode::Rjump, *line);
            let back_jump_offset =
                -((code_length_before_rjump as i64 + 2) - loop_head as i64);
            compiler
                .region_mut()
                .emit_constant_only(Value::Int(back_jump_offset), *line);

            let current_length = compiler.region().current_code_length();
            let exit_offset = current_length as i64 - body_start as i64 + 1;
            compiler
                .region_mut()
                .patch_constant(exit_patch_index, Value::Int(exit_offset))?;
            Ok(())
        }
    }
}

/// `DECLARE name type`, with no initializer handling — shared by a bare
/// declaration statement (which emits its own `STORE`/`POP` around this)
/// and a function literal's parameter list.
pub fn emit_declaration(compiler: &mut Compiler, decl: &Declaration) -> CompileResult<()> {
    compiler.region_mut().emit_op(Opcode::Declare, decl.line);
    compiler
        .region_mut()
        .emit_constant_only(Value::Str(decl.name.clone()), decl.line);
    compiler
        .region_mut()
        .emit_constant_only(Value::Type(decl.type_tag.clone()), decl.line);
    Ok(())
}

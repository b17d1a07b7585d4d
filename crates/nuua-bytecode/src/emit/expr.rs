//! Expression emission: one dispatch arm per AST expression variant, each
//! leaving exactly one value on the VM's operand stack when it returns.

use nuua_core::ast::Expr;
use nuua_core::error::CompileResult;
use nuua_core::opcode::Opcode;
use nuua_core::program::RegionId;
use nuua_core::value::Value;

use crate::compiler::{Compiler, RegionGuard};
use crate::emit::operator;
use crate::emit::stmt;

pub fn emit_expression(compiler: &mut Compiler, expr: &Expr) -> CompileResult<()> {
    compiler.set_current_line(expr.line());
    match expr {
        Expr::Int(v, line) => push_constant(compiler, Value::Int(*v), *line),
        Expr::Float(v, line) => push_constant(compiler, Value::Float(*v), *line),
        Expr::Str(v, line) => push_constant(compiler, Value::Str(v.clone()), *line),
        Expr::Bool(v, line) => push_constant(compiler, Value::Bool(*v), *line),
        Expr::Nil(line) => push_constant(compiler, Value::Nil, *line),

        Expr::List(elements, line) => {
            for element in elements.iter().rev() {
                emit_expression(compiler, element)?;
            }
            compiler.region_mut().emit_op(Opcode::List, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Int(elements.len() as i64), *line);
            Ok(())
        }

        Expr::Dictionary(pairs, line) => {
            for (key, value) in pairs.iter().rev() {
                compiler.region_mut().emit_op(Opcode::Push, *line);
                compiler
                    .region_mut()
                    .emit_constant_only(Value::Str(key.clone()), *line);
                emit_expression(compiler, value)?;
            }
            compiler.region_mut().emit_op(Opcode::Dictionary, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Int(pairs.len() as i64), *line);
            Ok(())
        }

        Expr::Group(inner, _) => emit_expression(compiler, inner),

        Expr::Unary { op, operand, line } => {
            emit_expression(compiler, operand)?;
            let opcode = operator::opcode_for(*op, true);
            compiler.region_mut().emit_op(opcode, *line);
            Ok(())
        }

        Expr::Binary {
            op, left, right, line,
        } => {
            emit_expression(compiler, left)?;
            emit_expression(compiler, right)?;
            let opcode = operator::opcode_for(*op, false);
            compiler.region_mut().emit_op(opcode, *line);
            Ok(())
        }

        Expr::Variable(name, line) => {
            compiler.region_mut().emit_op(Opcode::Load, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Str(name.clone()), *line);
            Ok(())
        }

        Expr::Assign { name, value, line } => {
            emit_expression(compiler, value)?;
            compiler.region_mut().emit_op(Opcode::Store, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Str(name.clone()), *line);
            Ok(())
        }

        Expr::IndexAssign {
            container,
            index,
            value,
            line,
        } => {
            emit_expression(compiler, value)?;
            emit_expression(compiler, index)?;
            compiler.region_mut().emit_op(Opcode::StoreAccess, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Str(container.clone()), *line);
            Ok(())
        }

        Expr::Access {
            container,
            index,
            line,
        } => {
            emit_expression(compiler, index)?;
            compiler.region_mut().emit_op(Opcode::Access, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Str(container.clone()), *line);
            Ok(())
        }

        Expr::Function {
            params,
            return_type,
            body,
            line,
        } => emit_function(compiler, params, return_type, body, *line),

        Expr::Call { callee, args, line } => {
            for arg in args {
                emit_expression(compiler, arg)?;
            }
            compiler.region_mut().emit_op(Opcode::Call, *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Str(callee.clone()), *line);
            compiler
                .region_mut()
                .emit_constant_only(Value::Int(args.len() as i64), *line);
            Ok(())
        }
    }
}

fn push_constant(compiler: &mut Compiler, value: Value, line: u32) -> CompileResult<()> {
    compiler.region_mut().emit_op(Opcode::Push, line);
    compiler.region_mut().emit_constant_only(value, line);
    Ok(())
}

/// Function literal: the only construct that switches the active region.
/// The body is emitted into `functions` through a [`RegionGuard`] so that a
/// rejected nested statement (an `if` with an `else`, say) still restores
/// the caller's region on its way out via `?` instead of leaving the
/// compiler stuck targeting `functions`.
fn emit_function(
    compiler: &mut Compiler,
    params: &[nuua_core::ast::Declaration],
    return_type: &nuua_core::value::TypeTag,
    body: &[nuua_core::ast::Stmt],
    line: u32,
) -> CompileResult<()> {
    let start = {
        let mut guard = RegionGuard::enter(compiler, RegionId::Functions);
        let start = guard.region().current_code_length();

        for param in params {
            stmt::emit_declaration(&mut guard, param)?;
        }
        for param in params.iter().rev() {
            guard.region_mut().emit_op(Opcode::OnlyStore, param.line);
            guard
                .region_mut()
                .emit_constant_only(Value::Str(param.name.clone()), param.line);
        }

        for statement in body {
            stmt::emit_statement(&mut guard, statement)?;
        }

        // A function that falls off its end returns nil without duplicating
        // any earlier explicit `return`.
        guard.region_mut().emit_op(Opcode::Push, line);
        guard.region_mut().emit_constant_only(Value::Nil, line);
        guard.region_mut().emit_op(Opcode::Return, line);

        start
    };

    compiler.region_mut().emit_op(Opcode::Function, line);
    compiler
        .region_mut()
        .emit_constant_only(Value::Int(start as i64), line);
    compiler
        .region_mut()
        .emit_constant_only(Value::Type(return_type.clone()), line);
    Ok(())
}

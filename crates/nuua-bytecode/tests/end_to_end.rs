//! End-to-end compile() scenarios, transcribed from the six literal
//! examples this system is tested against.

use nuua_core::opcode::Opcode;
use nuua_core::program::RegionId;
use nuua_core::value::{TypeTag, Value};

fn program_code(source: &str) -> Vec<i64> {
    let program = nuua_bytecode::compile(source).unwrap();
    program.program().code().to_vec()
}

#[test]
fn print_of_a_sum() {
    let program = nuua_bytecode::compile("print 1 + 2").unwrap();
    let region = program.program();
    assert_eq!(
        region.code(),
        &[
            Opcode::Push as i64,
            0,
            Opcode::Push as i64,
            1,
            Opcode::Add as i64,
            Opcode::Print as i64,
            Opcode::Exit as i64,
        ]
    );
    assert_eq!(region.constants(), &[Value::Int(1), Value::Int(2)]);
}

#[test]
fn typed_declaration_with_initializer() {
    let program = nuua_bytecode::compile("x: int = 5").unwrap();
    let region = program.program();
    assert_eq!(
        region.code(),
        &[
            Opcode::Declare as i64,
            0, // "x"
            1, // int type
            Opcode::Push as i64,
            2, // 5
            Opcode::Store as i64,
            0, // "x", reused
            Opcode::Pop as i64,
            Opcode::Exit as i64,
        ]
    );
    assert_eq!(
        region.constants(),
        &[
            Value::Str("x".into()),
            Value::Type(TypeTag::Int),
            Value::Int(5),
        ]
    );
}

#[test]
fn if_without_else_branches_over_its_body() {
    let program = nuua_bytecode::compile("if a == 1: print a").unwrap();
    let region = program.program();
    let code = region.code();
    assert_eq!(code[0], Opcode::Load as i64);
    assert_eq!(code[2], Opcode::Push as i64);
    assert_eq!(code[4], Opcode::Eq as i64);
    assert_eq!(code[5], Opcode::BranchFalse as i64);
    let patch_index = code[6] as usize;
    assert_eq!(region.constants()[patch_index], Value::Int(3));
    assert_eq!(code[7], Opcode::Load as i64);
    assert_eq!(code[9], Opcode::Print as i64);
    assert_eq!(*code.last().unwrap(), Opcode::Exit as i64);
}

#[test]
fn if_with_else_is_rejected() {
    let err = nuua_bytecode::compile("if a == 1: print a\nelse: print 0").unwrap_err();
    assert!(matches!(
        err,
        nuua_core::error::CompileError::UnsupportedIfElse { .. }
    ));
}

#[test]
fn while_loop_back_jumps_to_its_head() {
    let program = nuua_bytecode::compile("while a < 10: a = a + 1").unwrap();
    let region = program.program();
    let code = region.code();

    // RJUMP is the instruction right before the trailing EXIT.
    let rjump_pos = code.len() - 3;
    assert_eq!(code[rjump_pos], Opcode::Rjump as i64);
    let back_offset = region.constants()[code[rjump_pos + 1] as usize].clone();
    match back_offset {
        Value::Int(offset) => assert!(offset < 0, "back-jump offset must be negative"),
        other => panic!("expected an int offset, got {other:?}"),
    }
    assert_eq!(*code.last().unwrap(), Opcode::Exit as i64);
}

#[test]
fn function_definition_and_call() {
    let program =
        nuua_bytecode::compile("f = fn(x: int) -> int { return x + 1 }\nf(2)").unwrap();

    let functions = program.region(RegionId::Functions);
    assert_eq!(
        functions.code(),
        &[
            Opcode::Declare as i64,
            0, // "x"
            1, // int
            Opcode::OnlyStore as i64,
            0, // "x", reused
            Opcode::Load as i64,
            0, // "x", reused
            Opcode::Push as i64,
            2, // 1
            Opcode::Add as i64,
            Opcode::Return as i64,
            Opcode::Push as i64,
            3, // nil
            Opcode::Return as i64,
        ]
    );

    let main = program.program();
    assert_eq!(
        main.code(),
        &[
            Opcode::Function as i64,
            0, // start address
            1, // int return type
            Opcode::Store as i64,
            2, // "f"
            Opcode::Pop as i64,
            Opcode::Push as i64,
            3, // 2
            Opcode::Call as i64,
            2, // "f", reused
            4, // arg count 1
            Opcode::Pop as i64,
            Opcode::Exit as i64,
        ]
    );
}

#[test]
fn list_literal_emits_elements_in_reverse() {
    let code = program_code("[1, 2, 3]");
    assert_eq!(
        code,
        vec![
            Opcode::Push as i64,
            0, // 3
            Opcode::Push as i64,
            1, // 2
            Opcode::Push as i64,
            2, // 1
            Opcode::List as i64,
            3, // count
            Opcode::Pop as i64,
            Opcode::Exit as i64,
        ]
    );
    let program = nuua_bytecode::compile("[1, 2, 3]").unwrap();
    assert_eq!(
        program.program().constants(),
        &[Value::Int(3), Value::Int(2), Value::Int(1), Value::Int(3)]
    );
}

#[test]
fn every_region_keeps_code_and_lines_parallel() {
    let program = nuua_bytecode::compile(
        "f = fn(x: int) -> int { return x + 1 }\nif f(2) == 3: print f(2)",
    )
    .unwrap();
    for id in [RegionId::Program, RegionId::Functions, RegionId::Classes] {
        let region = program.region(id);
        assert_eq!(region.code().len(), region.lines().len());
    }
}

#[test]
fn program_code_is_deterministic() {
    let source = "x: int = 1\nprint x + 2";
    assert_eq!(program_code(source), program_code(source));
}

//! A positional decoder over a finalized [`Program`], for the CLI's
//! `--dump-bytecode` inspection flag.

use std::convert::TryFrom;
use std::fmt::Write as _;

use nuua_core::opcode::Opcode;
use nuua_core::program::{Program, RegionId};
use nuua_core::region::MemoryRegion;

/// Renders every region of `program` as a flat, human-readable listing.
/// Never used by the emitter itself — it only reads a finished [`Program`].
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for (label, id) in [
        ("program", RegionId::Program),
        ("functions", RegionId::Functions),
        ("classes", RegionId::Classes),
    ] {
        let _ = writeln!(out, "== {label} ==");
        disassemble_region(program.region(id), &mut out);
    }
    out
}

fn disassemble_region(region: &MemoryRegion, out: &mut String) {
    let code = region.code();
    let mut pc = 0usize;
    while pc < code.len() {
        let line = region.lines().get(pc).copied().unwrap_or(0);
        let raw = code[pc];
        let Ok(op) = Opcode::try_from(raw) else {
            let _ = writeln!(out, "{pc:04} line {line}  <invalid opcode {raw}>");
            pc += 1;
            continue;
        };
        let operand_count = op.operand_count();
        let operands = &code[pc + 1..(pc + 1 + operand_count).min(code.len())];
        let rendered: Vec<String> = operands
            .iter()
            .map(|&slot| match region.constants().get(slot as usize) {
                Some(value) => format!("{value}"),
                None => format!("<out of range: {slot}>"),
            })
            .collect();
        let _ = writeln!(out, "{pc:04} line {line}  {op:?} {}", rendered.join(", "));
        pc += 1 + operand_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuua_core::region::MemoryRegion as Region;
    use nuua_core::value::Value;

    #[test]
    fn decodes_a_push_print_exit_sequence() {
        let mut region = Region::new();
        region.emit_op(Opcode::Push, 1);
        region.emit_constant_only(Value::Int(7), 1);
        region.emit_op(Opcode::Print, 1);
        region.emit_op(Opcode::Exit, 1);

        let mut out = String::new();
        disassemble_region(&region, &mut out);
        assert!(out.contains("Push 7"));
        assert!(out.contains("Print"));
        assert!(out.contains("Exit"));
    }
}

//! Instruction renderer.
//!
//! Produces one assembly-style line per decoded instruction, used by the
//! per-step trace and by the standalone disassembly listing. Immediate
//! operands come from the bytes that followed the opcode in memory.

use super::instruction::{Instruction, Op};

/// Renders a decoded instruction as an assembly-style string.
///
/// # Arguments
///
/// * `inst` - The decoded table entry.
/// * `lo` - The byte at PC+1, if the instruction has operands.
/// * `hi` - The byte at PC+2, if the instruction has two operands.
///
/// # Returns
///
/// A mnemonic like `LD B, $2A` or `JP $0150`.
pub fn render(inst: &Instruction, lo: u8, hi: u8) -> String {
    let word = u16::from(hi) << 8 | u16::from(lo);

    match inst.op {
        Op::Nop => "NOP".to_string(),
        Op::LdRegReg { dst, src } => format!("LD {dst}, {src}"),
        Op::LdRegImm { dst } => format!("LD {dst}, ${lo:02X}"),
        Op::LdRegMem { dst, addr } => format!("LD {dst}, ({addr})"),
        Op::LdMemReg { addr, src } => format!("LD ({addr}), {src}"),
        Op::LdMemImm => format!("LD (HL), ${lo:02X}"),
        Op::LdWideImm { dst } => format!("LD {dst}, ${word:04X}"),
        Op::IncReg { reg } => format!("INC {reg}"),
        Op::DecReg { reg } => format!("DEC {reg}"),
        Op::IncMem => "INC (HL)".to_string(),
        Op::DecMem => "DEC (HL)".to_string(),
        Op::AddReg { src } => format!("ADD A, {src}"),
        Op::AddMem => "ADD A, (HL)".to_string(),
        Op::AddImm => format!("ADD A, ${lo:02X}"),
        Op::AddHl { src } => format!("ADD HL, {src}"),
        Op::IncWide { reg } => format!("INC {reg}"),
        Op::DecWide { reg } => format!("DEC {reg}"),
        Op::Jump => format!("JP ${word:04X}"),
        Op::JumpRel => format!("JR {:+}", lo as i8),
        Op::Push { pair } => format!("PUSH {pair}"),
        Op::Pop { pair } => format!("POP {pair}"),
        Op::Restart { vector } => format!("RST ${vector:02X}"),
    }
}

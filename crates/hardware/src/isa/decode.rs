//! The 256-entry decode table.
//!
//! Every implemented opcode maps to an [`Instruction`] record — operand
//! count, fixed cycle cost, transformation. The table is data, built once at
//! compile time; dispatch is a single indexed load. Bytes with no entry
//! (HALT, the 0xCB prefix, conditional flow, undefined encodings) decode to
//! `None` and fault at dispatch.
//!
//! The regular quadrants (LD r,r' and ADD A,r) are decoded from their bit
//! fields; the scattered rows are listed opcode by opcode.

use crate::core::regs::{Pair, Reg8};

use super::instruction::{Instruction, Op, VECTOR_MASK, Wide, dst_bits, src_bits};

/// Decode table indexed by opcode byte.
pub static OPCODES: [Option<Instruction>; 256] = build_table();

/// Looks up an opcode byte in the table.
///
/// # Returns
///
/// The table entry, or `None` for an unimplemented byte.
#[inline(always)]
pub fn decode(opcode: u8) -> Option<Instruction> {
    OPCODES[usize::from(opcode)]
}

/// Maps a 3-bit register field to its register.
///
/// Field value 6 names the (HL) memory cell, not a register, so it maps to
/// `None` and the caller picks the memory form.
const fn reg_code(bits: u8) -> Option<Reg8> {
    match bits {
        0 => Some(Reg8::B),
        1 => Some(Reg8::C),
        2 => Some(Reg8::D),
        3 => Some(Reg8::E),
        4 => Some(Reg8::H),
        5 => Some(Reg8::L),
        7 => Some(Reg8::A),
        _ => None,
    }
}

/// Maps the 2-bit wide-register field (opcode bits 4-5) to BC/DE/HL/SP.
const fn wide_code(opcode: u8) -> Wide {
    match (opcode >> 4) & 0x03 {
        0 => Wide::Bc,
        1 => Wide::De,
        2 => Wide::Hl,
        _ => Wide::Sp,
    }
}

/// Maps the 2-bit stack-pair field (opcode bits 4-5) to BC/DE/HL/AF.
const fn stack_code(opcode: u8) -> Pair {
    match (opcode >> 4) & 0x03 {
        0 => Pair::Bc,
        1 => Pair::De,
        2 => Pair::Hl,
        _ => Pair::Af,
    }
}

/// Decodes the LD quadrant, 0x40-0x7F.
///
/// Both register fields decode independently; a field value of 6 selects
/// the (HL) form on that side. 0x76 has 6 in both fields — that byte
/// encodes HALT, which this core does not model, so it gets no entry.
const fn ld_block(opcode: u8) -> Option<Instruction> {
    match (reg_code(dst_bits(opcode)), reg_code(src_bits(opcode))) {
        (Some(dst), Some(src)) => Some(Instruction::new(Op::LdRegReg { dst, src }, 0, 4)),
        (Some(dst), None) => Some(Instruction::new(
            Op::LdRegMem {
                dst,
                addr: Pair::Hl,
            },
            0,
            8,
        )),
        (None, Some(src)) => Some(Instruction::new(
            Op::LdMemReg {
                addr: Pair::Hl,
                src,
            },
            0,
            8,
        )),
        (None, None) => None,
    }
}

/// Decodes the ADD A row, 0x80-0x87.
const fn add_block(opcode: u8) -> Option<Instruction> {
    match reg_code(src_bits(opcode)) {
        Some(src) => Some(Instruction::new(Op::AddReg { src }, 0, 4)),
        None => Some(Instruction::new(Op::AddMem, 0, 8)),
    }
}

/// Returns the table entry for one opcode byte.
const fn entry(opcode: u8) -> Option<Instruction> {
    match opcode {
        0x00 => Some(Instruction::new(Op::Nop, 0, 4)),

        // LD rr,d16
        0x01 | 0x11 | 0x21 | 0x31 => Some(Instruction::new(
            Op::LdWideImm {
                dst: wide_code(opcode),
            },
            2,
            12,
        )),

        // LD (BC),A / LD (DE),A
        0x02 | 0x12 => Some(Instruction::new(
            Op::LdMemReg {
                addr: if opcode == 0x02 { Pair::Bc } else { Pair::De },
                src: Reg8::A,
            },
            0,
            8,
        )),

        // LD A,(BC) / LD A,(DE)
        0x0A | 0x1A => Some(Instruction::new(
            Op::LdRegMem {
                dst: Reg8::A,
                addr: if opcode == 0x0A { Pair::Bc } else { Pair::De },
            },
            0,
            8,
        )),

        // INC rr / DEC rr
        0x03 | 0x13 | 0x23 | 0x33 => Some(Instruction::new(
            Op::IncWide {
                reg: wide_code(opcode),
            },
            0,
            8,
        )),
        0x0B | 0x1B | 0x2B | 0x3B => Some(Instruction::new(
            Op::DecWide {
                reg: wide_code(opcode),
            },
            0,
            8,
        )),

        // ADD HL,rr
        0x09 | 0x19 | 0x29 | 0x39 => Some(Instruction::new(
            Op::AddHl {
                src: wide_code(opcode),
            },
            0,
            8,
        )),

        // INC r / INC (HL)
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x3C => match reg_code(dst_bits(opcode)) {
            Some(reg) => Some(Instruction::new(Op::IncReg { reg }, 0, 4)),
            None => None,
        },
        0x34 => Some(Instruction::new(Op::IncMem, 0, 12)),

        // DEC r / DEC (HL)
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x3D => match reg_code(dst_bits(opcode)) {
            Some(reg) => Some(Instruction::new(Op::DecReg { reg }, 0, 4)),
            None => None,
        },
        0x35 => Some(Instruction::new(Op::DecMem, 0, 12)),

        // LD r,d8 / LD (HL),d8
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => match reg_code(dst_bits(opcode)) {
            Some(dst) => Some(Instruction::new(Op::LdRegImm { dst }, 1, 8)),
            None => None,
        },
        0x36 => Some(Instruction::new(Op::LdMemImm, 1, 12)),

        // JR r8
        0x18 => Some(Instruction::new(Op::JumpRel, 1, 8)),

        0x40..=0x7F => ld_block(opcode),
        0x80..=0x87 => add_block(opcode),

        // JP a16 / ADD A,d8
        0xC3 => Some(Instruction::new(Op::Jump, 2, 12)),
        0xC6 => Some(Instruction::new(Op::AddImm, 1, 8)),

        // POP qq / PUSH qq
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Some(Instruction::new(
            Op::Pop {
                pair: stack_code(opcode),
            },
            0,
            12,
        )),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Some(Instruction::new(
            Op::Push {
                pair: stack_code(opcode),
            },
            0,
            16,
        )),

        // RST n: the vector field is the target address
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Some(Instruction::new(
            Op::Restart {
                vector: opcode & VECTOR_MASK,
            },
            0,
            32,
        )),

        _ => None,
    }
}

/// Builds the full table by evaluating [`entry`] for every byte value.
const fn build_table() -> [Option<Instruction>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = entry(opcode as u8);
        opcode += 1;
    }
    table
}

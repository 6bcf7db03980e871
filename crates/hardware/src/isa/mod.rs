//! Instruction set: encoding, the decode table, and the disassembler.
//!
//! Decode is fully separated from execution: the table maps an opcode byte
//! to a small data record (operand count, cycle cost, transformation) and
//! the execute stage in [`crate::core::exec`] interprets that record. The
//! table is built once at compile time.

/// The 256-entry decode table.
pub mod decode;

/// Mnemonic rendering for trace output and listings.
pub mod disasm;

/// Table entry types and opcode field extraction.
pub mod instruction;

pub use decode::{OPCODES, decode};
pub use instruction::{Instruction, Op, Wide};

//! Instruction encoding and table entry types.
//!
//! Provides bit extraction for the register fields packed into opcode bytes
//! and the data record the decode table hands to the execute stage.

use std::fmt;

use crate::core::regs::{Pair, Reg8};

/// Bit mask for the destination-register field (bits 3-5).
pub const DST_MASK: u8 = 0x38;

/// Bit mask for the source-register field (bits 0-2).
pub const SRC_MASK: u8 = 0x07;

/// Bit mask for the restart-vector field of RST opcodes (bits 3-5).
///
/// The masked value is the target address itself: RST opcodes jump to
/// 0x00, 0x08, ..., 0x38.
pub const VECTOR_MASK: u8 = 0x38;

/// Extracts the destination-register field (bits 3-5).
///
/// Used by the LD quadrant and the INC/DEC and LD-immediate rows. The value
/// 6 encodes the (HL) memory cell rather than a register.
#[inline(always)]
pub const fn dst_bits(opcode: u8) -> u8 {
    (opcode & DST_MASK) >> 3
}

/// Extracts the source-register field (bits 0-2).
///
/// Used by the LD quadrant and the ADD row. The value 6 encodes the (HL)
/// memory cell rather than a register.
#[inline(always)]
pub const fn src_bits(opcode: u8) -> u8 {
    opcode & SRC_MASK
}

/// A 16-bit operand of the wide-register rows: BC, DE, HL, or SP.
///
/// Distinct from [`Pair`] because the encoding's wide-register field names
/// SP where the stack rows name AF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wide {
    /// The BC pair.
    Bc,
    /// The DE pair.
    De,
    /// The HL pair.
    Hl,
    /// The stack pointer.
    Sp,
}

impl fmt::Display for Wide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bc => "BC",
            Self::De => "DE",
            Self::Hl => "HL",
            Self::Sp => "SP",
        };
        f.write_str(name)
    }
}

/// The transformation an instruction applies.
///
/// Every table entry carries one of these; the execute stage interprets it
/// against the register file and memory. Operand bytes (when the entry
/// declares any) arrive separately, already fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// No effect.
    Nop,
    /// Copy register to register.
    LdRegReg {
        /// Destination register.
        dst: Reg8,
        /// Source register.
        src: Reg8,
    },
    /// Load an immediate byte into a register.
    LdRegImm {
        /// Destination register.
        dst: Reg8,
    },
    /// Load from the memory cell addressed by a pair into a register.
    LdRegMem {
        /// Destination register.
        dst: Reg8,
        /// Pair holding the source address.
        addr: Pair,
    },
    /// Store a register into the memory cell addressed by a pair.
    LdMemReg {
        /// Pair holding the destination address.
        addr: Pair,
        /// Source register.
        src: Reg8,
    },
    /// Store an immediate byte into the cell addressed by HL.
    LdMemImm,
    /// Load a little-endian immediate word into a wide register.
    LdWideImm {
        /// Destination wide register.
        dst: Wide,
    },
    /// 8-bit register increment.
    IncReg {
        /// Register to increment.
        reg: Reg8,
    },
    /// 8-bit register decrement.
    DecReg {
        /// Register to decrement.
        reg: Reg8,
    },
    /// Increment the memory cell addressed by HL.
    IncMem,
    /// Decrement the memory cell addressed by HL.
    DecMem,
    /// Add a register into the accumulator.
    AddReg {
        /// Source register.
        src: Reg8,
    },
    /// Add the cell addressed by HL into the accumulator.
    AddMem,
    /// Add an immediate byte into the accumulator.
    AddImm,
    /// 16-bit add of a wide register into HL.
    AddHl {
        /// Source wide register.
        src: Wide,
    },
    /// 16-bit wide-register increment; no flag effect.
    IncWide {
        /// Wide register to increment.
        reg: Wide,
    },
    /// 16-bit wide-register decrement; no flag effect.
    DecWide {
        /// Wide register to decrement.
        reg: Wide,
    },
    /// Absolute jump to a little-endian immediate address.
    Jump,
    /// Relative jump by a signed immediate displacement.
    JumpRel,
    /// Push a register pair onto the stack.
    Push {
        /// Pair to push.
        pair: Pair,
    },
    /// Pop a register pair off the stack.
    Pop {
        /// Pair to pop into.
        pair: Pair,
    },
    /// Fixed-vector call: push the return address, jump to the vector.
    Restart {
        /// Target address (0x00, 0x08, ..., 0x38).
        vector: u8,
    },
}

/// Instruction-mix category, for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Data movement into registers.
    Load,
    /// Data movement into memory.
    Store,
    /// Arithmetic, including read-modify-write on memory.
    Alu,
    /// Control transfer.
    Control,
    /// Stack push/pop.
    Stack,
}

impl Op {
    /// Returns the instruction-mix category of this transformation.
    pub const fn category(self) -> Category {
        match self {
            Self::LdRegReg { .. }
            | Self::LdRegImm { .. }
            | Self::LdRegMem { .. }
            | Self::LdWideImm { .. } => Category::Load,
            Self::LdMemReg { .. } | Self::LdMemImm => Category::Store,
            Self::Nop
            | Self::IncReg { .. }
            | Self::DecReg { .. }
            | Self::IncMem
            | Self::DecMem
            | Self::AddReg { .. }
            | Self::AddMem
            | Self::AddImm
            | Self::AddHl { .. }
            | Self::IncWide { .. }
            | Self::DecWide { .. } => Category::Alu,
            Self::Jump | Self::JumpRel | Self::Restart { .. } => Category::Control,
            Self::Push { .. } | Self::Pop { .. } => Category::Stack,
        }
    }
}

/// One decode-table entry.
///
/// The fixed data the dispatcher needs: how many operand bytes follow the
/// opcode, what the step costs, and which transformation to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The transformation to apply.
    pub op: Op,
    /// Number of operand bytes following the opcode (0-2).
    pub operands: u8,
    /// Fixed cycle cost reported for the step.
    pub cycles: u32,
}

impl Instruction {
    /// Creates a table entry.
    #[inline(always)]
    pub const fn new(op: Op, operands: u8, cycles: u32) -> Self {
        Self {
            op,
            operands,
            cycles,
        }
    }

    /// Total encoded length in bytes: the opcode plus its operands.
    #[inline(always)]
    pub const fn length(&self) -> u16 {
        1 + self.operands as u16
    }
}

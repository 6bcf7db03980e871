//! Register file: eight byte registers, pair views, PC, and SP.
//!
//! This module holds all CPU-visible state except memory. It provides:
//! 1. **Byte Registers:** A, F, B, C, D, E, H, L with read/write access.
//! 2. **Pair Views:** AF, BC, DE, HL as derived big-endian 16-bit values.
//! 3. **Control Registers:** The program counter and stack pointer, both wrapping.
//! 4. **Debugging:** A dump of the complete register state.

use std::fmt;

use crate::common::Addr;

/// One of the eight byte registers.
///
/// F is addressable like any other register; the flag accessors in
/// [`crate::core::flags`] are views over its upper four bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    /// Accumulator.
    A,
    /// Flag register (Zero, Subtract, HalfCarry, Carry in bits 7-4).
    F,
    /// General-purpose register B (high half of BC).
    B,
    /// General-purpose register C (low half of BC).
    C,
    /// General-purpose register D (high half of DE).
    D,
    /// General-purpose register E (low half of DE).
    E,
    /// General-purpose register H (high half of HL).
    H,
    /// General-purpose register L (low half of HL).
    L,
}

impl Reg8 {
    /// Returns the storage index of this register.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::F => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
            Self::E => 5,
            Self::H => 6,
            Self::L => 7,
        }
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::F => "F",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::H => "H",
            Self::L => "L",
        };
        f.write_str(name)
    }
}

/// A 16-bit register pair, high byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pair {
    /// Accumulator and flags.
    Af,
    /// B and C.
    Bc,
    /// D and E.
    De,
    /// H and L; also the indirect-addressing register.
    Hl,
}

impl Pair {
    /// Returns the register holding the high byte of the pair.
    #[inline(always)]
    pub const fn hi(self) -> Reg8 {
        match self {
            Self::Af => Reg8::A,
            Self::Bc => Reg8::B,
            Self::De => Reg8::D,
            Self::Hl => Reg8::H,
        }
    }

    /// Returns the register holding the low byte of the pair.
    #[inline(always)]
    pub const fn lo(self) -> Reg8 {
        match self {
            Self::Af => Reg8::F,
            Self::Bc => Reg8::C,
            Self::De => Reg8::E,
            Self::Hl => Reg8::L,
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Af => "AF",
            Self::Bc => "BC",
            Self::De => "DE",
            Self::Hl => "HL",
        };
        f.write_str(name)
    }
}

/// The complete register file.
///
/// All values are in range by construction: byte registers are `u8`, PC and
/// SP are [`Addr`], and every mutation wraps at its type's boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; 8],
    pc: Addr,
    sp: Addr,
}

impl RegisterFile {
    /// Creates a register file with every register, PC, and SP zeroed.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` ready for [`reset`](crate::core::Cpu::reset).
    pub const fn new() -> Self {
        Self {
            regs: [0; 8],
            pc: Addr::new(0),
            sp: Addr::new(0),
        }
    }

    /// Reads a byte register.
    #[inline(always)]
    pub const fn read(&self, reg: Reg8) -> u8 {
        self.regs[reg.index()]
    }

    /// Writes a byte register.
    ///
    /// F is stored verbatim, all eight bits: a word written through
    /// [`set_pair`](Self::set_pair) reads back bit-exact, which is what makes
    /// the push/pop round-trip exact for AF.
    #[inline(always)]
    pub const fn write(&mut self, reg: Reg8, value: u8) {
        self.regs[reg.index()] = value;
    }

    /// Reads a register pair as `high << 8 | low`.
    #[inline(always)]
    pub const fn pair(&self, pair: Pair) -> u16 {
        let hi = self.read(pair.hi()) as u16;
        let lo = self.read(pair.lo()) as u16;
        hi << 8 | lo
    }

    /// Writes both halves of a register pair.
    ///
    /// The halves update together; no caller can observe one half written
    /// and the other stale.
    #[inline(always)]
    pub const fn set_pair(&mut self, pair: Pair, word: u16) {
        self.write(pair.hi(), (word >> 8) as u8);
        self.write(pair.lo(), (word & 0xFF) as u8);
    }

    /// Returns the program counter.
    #[inline(always)]
    pub const fn pc(&self) -> Addr {
        self.pc
    }

    /// Sets the program counter.
    #[inline(always)]
    pub const fn set_pc(&mut self, addr: Addr) {
        self.pc = addr;
    }

    /// Advances the program counter by `n` bytes, wrapping.
    #[inline(always)]
    pub const fn advance_pc(&mut self, n: u16) {
        self.pc = self.pc.wrapping_add(n);
    }

    /// Returns the stack pointer.
    #[inline(always)]
    pub const fn sp(&self) -> Addr {
        self.sp
    }

    /// Sets the stack pointer.
    #[inline(always)]
    pub const fn set_sp(&mut self, addr: Addr) {
        self.sp = addr;
    }

    /// Prints the register state to stdout, one pair per column.
    pub fn dump(&self) {
        println!(
            "AF={:#06x} BC={:#06x}",
            self.pair(Pair::Af),
            self.pair(Pair::Bc)
        );
        println!(
            "DE={:#06x} HL={:#06x}",
            self.pair(Pair::De),
            self.pair(Pair::Hl)
        );
        println!("PC={} SP={}", self.pc, self.sp);
    }
}

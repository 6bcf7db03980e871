//! Named flag bits of register F.
//!
//! The four status flags live in the upper nibble of F; the lower nibble is
//! unspecified and never consulted. Operations name flags rather than
//! manipulating F's bits directly, so each flag rule reads like the
//! hardware documentation it came from.

use std::fmt;

use super::regs::{Reg8, RegisterFile};

/// Bit mask of the Zero flag (bit 7 of F).
pub const ZERO_MASK: u8 = 0b1000_0000;

/// Bit mask of the Subtract flag (bit 6 of F).
pub const SUBTRACT_MASK: u8 = 0b0100_0000;

/// Bit mask of the HalfCarry flag (bit 5 of F).
pub const HALF_CARRY_MASK: u8 = 0b0010_0000;

/// Bit mask of the Carry flag (bit 4 of F).
pub const CARRY_MASK: u8 = 0b0001_0000;

/// One of the four named status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// Set when an operation's result is exactly zero.
    Zero,
    /// Set by subtraction-family operations, cleared by addition-family ones.
    Subtract,
    /// Set on a carry or borrow across the low-nibble boundary.
    HalfCarry,
    /// Set on a carry or borrow out of the full operand width.
    Carry,
}

impl Flag {
    /// Returns the bit mask of this flag within F.
    #[inline(always)]
    pub const fn mask(self) -> u8 {
        match self {
            Self::Zero => ZERO_MASK,
            Self::Subtract => SUBTRACT_MASK,
            Self::HalfCarry => HALF_CARRY_MASK,
            Self::Carry => CARRY_MASK,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "Z",
            Self::Subtract => "N",
            Self::HalfCarry => "H",
            Self::Carry => "C",
        };
        f.write_str(name)
    }
}

impl RegisterFile {
    /// Reads one flag bit of F.
    #[inline(always)]
    pub const fn flag(&self, flag: Flag) -> bool {
        self.read(Reg8::F) & flag.mask() != 0
    }

    /// Sets or clears one flag bit of F, leaving every other bit untouched.
    #[inline(always)]
    pub const fn set_flag(&mut self, flag: Flag, on: bool) {
        let f = self.read(Reg8::F);
        if on {
            self.write(Reg8::F, f | flag.mask());
        } else {
            self.write(Reg8::F, f & !flag.mask());
        }
    }

    /// Renders the four flags as a compact `Z N H C` presence string.
    ///
    /// Set flags show their letter; clear flags show `-`. Used by the state
    /// dump and by test diagnostics.
    pub fn flags_display(&self) -> String {
        let bit = |flag: Flag, letter: &'static str| if self.flag(flag) { letter } else { "-" };
        format!(
            "{}{}{}{}",
            bit(Flag::Zero, "Z"),
            bit(Flag::Subtract, "N"),
            bit(Flag::HalfCarry, "H"),
            bit(Flag::Carry, "C")
        )
    }
}

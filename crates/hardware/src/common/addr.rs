//! 16-bit address type for the SM83 address space.
//!
//! This module defines a strong type for bus addresses to keep 8-bit data and
//! 16-bit addresses apart at compile time. It provides the following:
//! 1. **Type Safety:** The program counter, stack pointer, and every memory index share one type.
//! 2. **Wrapping Arithmetic:** All address math wraps at the 16-bit boundary, so out-of-range addresses are unrepresentable.
//! 3. **Displacement Handling:** Signed 8-bit jump displacements apply in two's complement.

use std::fmt;

/// An address in the SM83's 64 KiB bus space.
///
/// Addresses are 16 bits by construction; arithmetic on them wraps rather
/// than overflowing, which is exactly the behavior of the address bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Addr(pub u16);

impl Addr {
    /// Creates a new address from a raw 16-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 16-bit address value.
    ///
    /// # Returns
    ///
    /// A new `Addr` instance wrapping the provided address.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    ///
    /// # Returns
    ///
    /// The underlying 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address advanced by `n`, wrapping at the 16-bit boundary.
    #[inline(always)]
    pub const fn wrapping_add(self, n: u16) -> Self {
        Self(self.0.wrapping_add(n))
    }

    /// Returns the address moved back by `n`, wrapping at the 16-bit boundary.
    #[inline(always)]
    pub const fn wrapping_sub(self, n: u16) -> Self {
        Self(self.0.wrapping_sub(n))
    }

    /// Applies a signed 8-bit displacement in two's complement.
    ///
    /// This is the relative-jump rule: the displacement byte is sign-extended
    /// and added to the address with 16-bit wraparound.
    #[inline(always)]
    pub const fn offset(self, displacement: i8) -> Self {
        Self(self.0.wrapping_add(displacement as u16))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl fmt::LowerHex for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u16> for Addr {
    fn from(addr: u16) -> Self {
        Self(addr)
    }
}

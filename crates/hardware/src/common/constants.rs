//! Global machine constants.
//!
//! This module defines system-wide constants used across the interpreter. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Reset Constants:** Program counter and stack pointer values after reset.
//! 3. **Timing Constants:** The pacing rate tying cycle counts to wall-clock time.

/// Total size of the flat address space in bytes (64 KiB).
///
/// The entire bus is one byte-addressable image; there is no bank switching
/// in this core, so every 16-bit address names exactly one of these cells.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Program counter value after reset.
///
/// The cartridge entry point: execution of a loaded image begins here, which
/// is where the boot ROM hands control on the real hardware.
pub const RESET_PC: u16 = 0x0100;

/// Stack pointer value after reset (top of high RAM).
///
/// The stack grows downward from this address; pushes decrement first.
pub const RESET_SP: u16 = 0xFFFE;

/// Pacing rate in nanoseconds per machine cycle.
///
/// Every instruction reports a fixed cycle cost; the host multiplies that
/// cost by this rate to obtain the wall-clock budget for the step.
pub const NS_PER_CYCLE: f64 = 23.84;

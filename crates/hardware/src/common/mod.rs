//! Common utilities and types used throughout the SM83 interpreter.
//!
//! This module provides fundamental building blocks that are shared across
//! all components of the core. It includes:
//! 1. **Address Type:** A strong 16-bit type for bus addresses with wrapping arithmetic.
//! 2. **Constants:** Address-space geometry, reset values, and the pacing rate.
//! 3. **Error Handling:** The fault taxonomy for fatal conditions.

/// Address type definition for the 64 KiB bus space.
pub mod addr;

/// Machine constants (memory size, reset values, pacing rate).
pub mod constants;

/// Fault types for fatal conditions.
pub mod error;

pub use addr::Addr;
pub use constants::{MEMORY_SIZE, NS_PER_CYCLE, RESET_PC, RESET_SP};
pub use error::Fault;

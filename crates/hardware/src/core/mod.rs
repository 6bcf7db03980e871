//! CPU core: architectural state and the dispatch loop.
//!
//! This module contains everything that models the processor itself:
//! 1. **Register File:** Eight byte registers, pair views, PC, and SP.
//! 2. **Flags:** The four named status bits packed into register F.
//! 3. **ALU:** Flag-setting arithmetic helpers shared by the execute stage.
//! 4. **CPU:** The owned core instance and its fetch/decode/execute step.

/// Flag-setting arithmetic helpers.
pub mod alu;

/// The CPU instance: construction, reset, image loading, state dump.
pub mod cpu;

/// The dispatch step: fetch, decode, execute, cycle reporting.
pub mod exec;

/// Named flag bits of register F.
pub mod flags;

/// Register file with pair views and PC/SP.
pub mod regs;

pub use cpu::Cpu;
pub use flags::Flag;
pub use regs::{Pair, Reg8, RegisterFile};

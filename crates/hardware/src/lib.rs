//! SM83 CPU core simulator library.
//!
//! This crate implements a cycle-paced interpreter for the Sharp SM83
//! (Game Boy DMG) processor core with the following:
//! 1. **Core:** Byte register file with pair views, flag arithmetic, and
//!    fetch/decode/execute dispatch.
//! 2. **ISA:** A data-driven 256-entry decode table with fixed cycle costs
//!    and an instruction renderer.
//! 3. **Memory:** A flat 64 KiB byte-addressable image with no banking.
//! 4. **Simulation:** Image loader, real-time pacing arithmetic, and
//!    statistics collection.

/// Common types and constants (addresses, memory size, reset values, faults).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures, JSON loading).
pub mod config;
/// CPU core (registers, flags, ALU, dispatch).
pub mod core;
/// Instruction set (decode table, instruction records, renderer).
pub mod isa;
/// Image loader, pacing, and the top-level simulator.
pub mod sim;
/// Machine memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load JSON with `Config::from_file`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Error type for everything that can stop the machine.
pub use crate::common::Fault;
/// Top-level driver pairing a core with its pacing policy.
pub use crate::sim::Simulator;

//! Instruction set tests.
//!
//! This module aggregates tests for the decode table and the instruction
//! renderer.


/// Unit tests for the renderer.
///
/// Verifies the assembly-style line produced for each instruction form.
pub mod disasm;

//! Fault definitions.
//!
//! This module defines the error handling for the interpreter. It provides:
//! 1. **Fault Representation:** Every fatal condition the core can hit, with its diagnostic payload.
//! 2. **Fail-Fast Policy:** No variant is recoverable; the host reports, dumps state, and terminates.
//! 3. **Error Handling:** Integration with standard Rust error traits for host-level reporting.
//!
//! Address range errors have no variant here: addresses are 16 bits by
//! construction and wrap, so an out-of-range access is unrepresentable.

use std::io;

use thiserror::Error;

use super::addr::Addr;

/// Fatal conditions raised by the core.
///
/// There is no recoverable-error path: once the modeled machine's state can
/// no longer be trusted, the only honest move is a diagnostic and an abort.
/// The host converts any of these into a report, a register dump, and a
/// nonzero process exit.
#[derive(Debug, Error)]
pub enum Fault {
    /// The program image could not be read from storage.
    ///
    /// A machine with no valid program cannot meaningfully continue, so this
    /// aborts the run before the dispatch loop ever starts.
    #[error("could not read program image '{path}': {source}")]
    ImageUnreadable {
        /// Path of the image file that failed to load.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The program image is larger than the address space.
    ///
    /// Loading would run past the end of memory; truncating silently would
    /// execute a program different from the one on disk.
    #[error("program image is {size} bytes; the address space holds {limit}")]
    OversizedImage {
        /// Size of the rejected image in bytes.
        size: usize,
        /// Capacity of the address space in bytes.
        limit: usize,
    },

    /// The fetched opcode byte has no entry in the decode table.
    ///
    /// Carries the opcode value and the address it was fetched from, which
    /// is everything needed to locate the instruction in the image.
    #[error("unimplemented opcode {opcode:#04x} at {pc}")]
    UnimplementedOpcode {
        /// The opcode byte with no table entry.
        opcode: u8,
        /// The address the byte was fetched from.
        pc: Addr,
    },
}

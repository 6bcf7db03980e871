//! Machine memory.
//!
//! The SM83 core sees a single flat 64 KiB byte-addressable space. There is
//! no interconnect, no memory-mapped peripherals and no banking: every
//! address from `0x0000` to `0xFFFF` is ordinary RAM backed by
//! [`MemoryImage`].

pub mod memory;

pub use memory::MemoryImage;

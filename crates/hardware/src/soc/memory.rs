//! Flat RAM image.
//!
//! Backing store for the machine's 64 KiB address space. Allocated zeroed
//! once at construction; a program image is overlaid from address zero and
//! everything above it stays zero. Reads and writes are plain byte accesses
//! with no side effects, and every 16-bit address is in bounds by
//! construction.

use std::fmt;

use crate::common::{Addr, MEMORY_SIZE};

/// The 64 KiB flat memory image.
///
/// The buffer always holds exactly [`MEMORY_SIZE`] bytes, so any `u16`
/// address indexes it without a bounds fault.
pub struct MemoryImage {
    bytes: Box<[u8]>,
}

impl MemoryImage {
    /// Creates a zero-filled memory image.
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Reads the byte at an address.
    #[inline(always)]
    pub fn read(&self, addr: Addr) -> u8 {
        self.bytes[usize::from(addr.val())]
    }

    /// Writes a byte to an address.
    #[inline(always)]
    pub fn write(&mut self, addr: Addr, value: u8) {
        self.bytes[usize::from(addr.val())] = value;
    }

    /// Overlays a program image starting at address zero.
    ///
    /// The caller checks the image fits; bytes past the image keep their
    /// current contents.
    pub fn load(&mut self, image: &[u8]) {
        self.bytes[..image.len()].copy_from_slice(image);
    }

    /// Returns a view of the whole address space.
    ///
    /// # Returns
    ///
    /// A slice of exactly [`MEMORY_SIZE`] bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for MemoryImage {
    /// Equivalent to [`MemoryImage::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryImage {
    /// Summarises the image instead of dumping 64 KiB of bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

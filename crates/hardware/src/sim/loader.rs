//! Program image loading.
//!
//! This module reads raw binary images from disk into the simulated
//! machine. It performs:
//! 1. **File reading:** The whole image comes into a byte buffer in one read.
//! 2. **Placement:** The image lands at address zero of the flat memory,
//!    after the size check in [`Cpu::load_image`].

use std::fs;

use crate::common::Fault;
use crate::core::Cpu;

/// Reads a binary image file from disk.
///
/// # Arguments
///
/// * `path` - Path to the image file.
///
/// # Returns
///
/// The raw bytes of the file, or [`Fault::ImageUnreadable`] naming the
/// path and the underlying I/O error.
pub fn read_image(path: &str) -> Result<Vec<u8>, Fault> {
    fs::read(path).map_err(|source| Fault::ImageUnreadable {
        path: path.to_string(),
        source,
    })
}

/// Reads an image file and copies it into a core's memory.
///
/// # Arguments
///
/// * `cpu` - The core receiving the image.
/// * `path` - Path to the image file.
///
/// # Returns
///
/// The number of bytes loaded, or the fault from reading or placing the
/// image.
pub fn load_into(cpu: &mut Cpu, path: &str) -> Result<usize, Fault> {
    let image = read_image(path)?;
    cpu.load_image(&image)?;
    Ok(image.len())
}

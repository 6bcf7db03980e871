//! The SM83 processor core.
//!
//! This module owns the machine state: register file, flat memory image,
//! and execution statistics. It provides:
//! 1. **Construction:** [`Cpu::new`] builds a core from a [`Config`] with
//!    zeroed memory.
//! 2. **Lifecycle:** [`Cpu::load_image`] overlays a program, [`Cpu::reset`]
//!    restores the power-on register state without touching memory.
//! 3. **Debugging:** [`Cpu::dump_state`] prints the full register and flag
//!    state to stdout.
//!
//! Instruction dispatch lives in [`crate::core::exec`].

use tracing::debug;

use crate::common::{Addr, Fault, MEMORY_SIZE};
use crate::config::Config;
use crate::core::regs::RegisterFile;
use crate::soc::MemoryImage;
use crate::stats::SimStats;

/// The CPU core state.
#[derive(Debug)]
pub struct Cpu {
    /// Byte registers, PC, and SP.
    pub regs: RegisterFile,
    /// The 64 KiB flat memory image.
    pub mem: MemoryImage,
    /// Execution statistics.
    pub stats: SimStats,
    /// Enable per-instruction tracing to stdout.
    pub trace: bool,

    /// PC value a reset establishes.
    reset_pc: Addr,
    /// SP value a reset establishes.
    reset_sp: Addr,
    /// Cycle cost of the most recently retired instruction.
    last_cycles: u32,
}

impl Cpu {
    /// Creates a new CPU core from the given configuration.
    ///
    /// Memory is zero-filled once, here; a subsequent [`reset`](Self::reset)
    /// leaves it alone so a loaded program image survives.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` in post-reset state with empty memory.
    pub fn new(config: &Config) -> Self {
        let mut cpu = Self {
            regs: RegisterFile::new(),
            mem: MemoryImage::new(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            reset_pc: Addr::new(config.machine.start_pc),
            reset_sp: Addr::new(config.machine.stack_top),
            last_cycles: 0,
        };
        cpu.reset();
        cpu
    }

    /// Restores the power-on register state.
    ///
    /// Every byte register and flag is cleared, PC and SP return to their
    /// configured reset values. Memory is not cleared, so resetting after
    /// [`load_image`](Self::load_image) restarts the loaded program.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.regs.set_pc(self.reset_pc);
        self.regs.set_sp(self.reset_sp);
        self.last_cycles = 0;
        debug!(pc = %self.reset_pc, sp = %self.reset_sp, "core reset");
    }

    /// Copies a program image into memory starting at address zero.
    ///
    /// Bytes above the image keep their current contents (zero on a fresh
    /// core).
    ///
    /// # Arguments
    ///
    /// * `image` - The raw program bytes.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or [`Fault::OversizedImage`] if the image does not fit in
    /// the address space.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), Fault> {
        if image.len() > MEMORY_SIZE {
            return Err(Fault::OversizedImage {
                size: image.len(),
                limit: MEMORY_SIZE,
            });
        }
        self.mem.load(image);
        debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Returns the cycle cost of the most recently retired instruction.
    ///
    /// Zero until the first instruction retires after construction or
    /// reset.
    #[inline(always)]
    pub const fn last_cycle_cost(&self) -> u32 {
        self.last_cycles
    }

    /// Records the cycle cost of a retired instruction.
    #[inline(always)]
    pub(crate) const fn set_last_cycle_cost(&mut self, cycles: u32) {
        self.last_cycles = cycles;
    }

    /// Dumps the current CPU state (registers and flags) to stdout.
    pub fn dump_state(&self) {
        self.regs.dump();
        println!("Flags: {}", self.regs.flags_display());
    }
}

//! Simulator: owns the CPU core and its pacing policy side-by-side.
//!
//! The core knows nothing about wall-clock time; the pacer knows nothing
//! about machine state. The simulator holds both so a host can drive
//! stepped execution and pacing from one place.

use crate::common::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::sim::pacing::Pacer;

/// Top-level simulator: CPU architectural state + pacing arithmetic.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    /// Cycle-to-wall-clock conversion for paced runs.
    pub pacer: Pacer,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            pacer: Pacer::new(config.timing.ns_per_cycle),
        }
    }

    /// Reads an image file into the core's memory.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded, or the fault that stopped the load.
    pub fn load_image(&mut self, path: &str) -> Result<usize, Fault> {
        loader::load_into(&mut self.cpu, path)
    }

    /// Restores the power-on register state, keeping loaded memory.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The retired instruction's cycle cost, or the fault that stopped
    /// the machine.
    pub fn step(&mut self) -> Result<u32, Fault> {
        self.cpu.step()
    }
}

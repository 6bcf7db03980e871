//! Configuration system for the SM83 core simulator.
//!
//! This module defines the configuration structures used to parameterize
//! a simulated machine. It provides:
//! 1. **Defaults:** Baseline machine constants (reset vector, stack top, clock pacing).
//! 2. **Structures:** Hierarchical config for general, machine, and timing settings.
//! 3. **Loading:** JSON deserialization via [`Config::from_file`], with serde
//!    defaults so partial files work.

use std::fs;

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine configuration when not
/// explicitly overridden in a JSON configuration file.
mod defaults {
    use crate::common::constants;

    /// Initial program counter after reset.
    ///
    /// Matches the entry point of a cartridge image on the modeled
    /// hardware, past the 256-byte boot region.
    pub const START_PC: u16 = constants::RESET_PC;

    /// Initial stack pointer after reset.
    ///
    /// The stack grows downward from the top of the address space.
    pub const STACK_TOP: u16 = constants::RESET_SP;

    /// Wall-clock nanoseconds per simulated cycle.
    pub const NS_PER_CYCLE: f64 = constants::NS_PER_CYCLE;

    /// Instruction count limit per run (0 = unbounded).
    pub const MAX_STEPS: u64 = 0;

    /// Whether real-time pacing is on by default.
    pub const PACE: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// Configuration is supplied as JSON via [`Config::from_file`], or use
/// `Config::default()` when no file is given. Every section and field is
/// optional in the JSON, so a partial file overrides only what it names.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use sm83_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.machine.start_pc, 0x0100);
/// assert_eq!(config.machine.stack_top, 0xFFFE);
/// ```
///
/// Deserializing from partial JSON:
///
/// ```
/// use sm83_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true
///     },
///     "timing": {
///         "pace": false
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.trace_instructions, true);
/// assert_eq!(config.timing.pace, false);
/// assert_eq!(config.machine.start_pc, 0x0100);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reset state of the simulated machine
    #[serde(default)]
    pub machine: MachineConfig,
    /// Real-time pacing parameters
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON configuration file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or a message describing why the file
    /// could not be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("could not read config file '{path}': {e}"))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("could not parse config file '{path}': {e}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            machine: MachineConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

/// General simulation settings and options.
///
/// Contains high-level simulation configuration such as per-instruction
/// tracing and the run-length limit.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print each executed instruction with its address and cycle cost
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop after this many instructions (0 = run until fault)
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,
}

impl GeneralConfig {
    /// Returns the default instruction count limit.
    fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Reset state of the simulated machine.
///
/// Defines where execution starts and where the stack begins after a
/// reset.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Program counter value after reset
    #[serde(default = "MachineConfig::default_start_pc")]
    pub start_pc: u16,

    /// Stack pointer value after reset
    #[serde(default = "MachineConfig::default_stack_top")]
    pub stack_top: u16,
}

impl MachineConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u16 {
        defaults::START_PC
    }

    /// Returns the default initial stack pointer.
    fn default_stack_top() -> u16 {
        defaults::STACK_TOP
    }
}

impl Default for MachineConfig {
    /// Creates a default machine configuration.
    ///
    /// Execution starts at the cartridge entry point with the stack at
    /// the top of the address space.
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            stack_top: defaults::STACK_TOP,
        }
    }
}

/// Real-time pacing parameters.
///
/// Controls whether the host slows simulation down to the modeled clock
/// rate, and what that rate is.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Wall-clock nanoseconds each simulated cycle should take
    #[serde(default = "TimingConfig::default_ns_per_cycle")]
    pub ns_per_cycle: f64,

    /// Sleep off the remaining budget after each instruction
    #[serde(default = "TimingConfig::default_pace")]
    pub pace: bool,
}

impl TimingConfig {
    /// Returns the default nanoseconds-per-cycle budget.
    fn default_ns_per_cycle() -> f64 {
        defaults::NS_PER_CYCLE
    }

    /// Pacing defaults to on so runs approximate the modeled clock.
    fn default_pace() -> bool {
        defaults::PACE
    }
}

impl Default for TimingConfig {
    /// Creates a default timing configuration.
    ///
    /// Pacing is enabled at the modeled clock rate.
    fn default() -> Self {
        Self {
            ns_per_cycle: defaults::NS_PER_CYCLE,
            pace: defaults::PACE,
        }
    }
}

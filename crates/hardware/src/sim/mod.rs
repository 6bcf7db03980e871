//! Simulation utilities: program loading, real-time pacing, and the
//! top-level driver that ties a core to its clock.

pub mod loader;
pub mod pacing;
pub mod simulator;

pub use pacing::Pacer;
pub use simulator::Simulator;

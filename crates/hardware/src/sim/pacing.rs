//! Real-time pacing.
//!
//! The simulated clock runs far faster on a host CPU than the modeled
//! hardware did, so a paced run sleeps off the difference. [`Pacer`] does
//! the arithmetic only: it converts retired cycles into a wall-clock
//! budget and reports how far ahead of that budget the host is. Whether
//! and when to actually sleep is the caller's decision.

use std::time::Duration;

use crate::common::NS_PER_CYCLE;

/// Converts simulated cycles into wall-clock budgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pacer {
    ns_per_cycle: f64,
}

impl Pacer {
    /// Creates a pacer with the given nanoseconds-per-cycle rate.
    pub const fn new(ns_per_cycle: f64) -> Self {
        Self { ns_per_cycle }
    }

    /// Returns the wall-clock budget for a number of cycles.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Simulated cycles to account for.
    ///
    /// # Returns
    ///
    /// The duration those cycles take at the configured rate, truncated
    /// to whole nanoseconds.
    pub fn budget(&self, cycles: u32) -> Duration {
        let nanos = f64::from(cycles) * self.ns_per_cycle;
        Duration::from_nanos(nanos as u64)
    }

    /// Returns how much of a cycle budget is still unspent.
    ///
    /// # Arguments
    ///
    /// * `cycles` - Simulated cycles the work accounted for.
    /// * `elapsed` - Wall-clock time the host actually spent.
    ///
    /// # Returns
    ///
    /// The remaining budget, or zero when the host is already at or
    /// behind the modeled clock.
    pub fn shortfall(&self, cycles: u32, elapsed: Duration) -> Duration {
        self.budget(cycles).saturating_sub(elapsed)
    }
}

impl Default for Pacer {
    /// Creates a pacer at the modeled hardware clock rate.
    fn default() -> Self {
        Self::new(NS_PER_CYCLE)
    }
}

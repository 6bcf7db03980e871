//! # Pacing Tests
//!
//! The cycle-to-duration arithmetic behind paced runs. The modeled rate
//! of 23.84 ns per cycle never divides evenly into whole nanoseconds, so
//! these tests pin the truncation as well as the scaling.

use std::time::Duration;

use proptest::prelude::*;
use sm83_core::sim::Pacer;

/// Tests that a single cycle at the modeled rate truncates down to
/// whole nanoseconds.
#[test]
fn budget_truncates_to_nanos() {
    let pacer = Pacer::new(23.84);
    assert_eq!(pacer.budget(1), Duration::from_nanos(23));
}

/// Tests the budget of one four-cycle instruction at the default rate.
#[test]
fn budget_of_one_instruction() {
    let pacer = Pacer::default();
    assert_eq!(pacer.budget(4), Duration::from_nanos(95));
}

/// Tests that the budget scales linearly with the cycle count.
#[test]
fn budget_scales_with_cycles() {
    let pacer = Pacer::new(100.0);
    assert_eq!(pacer.budget(10), Duration::from_nanos(1_000));
}

/// Tests that zero cycles cost no time.
#[test]
fn budget_of_nothing_is_zero() {
    let pacer = Pacer::default();
    assert_eq!(pacer.budget(0), Duration::ZERO);
}

/// Tests the shortfall when the host finishes ahead of the modeled
/// clock: the unspent part of the budget comes back.
#[test]
fn shortfall_reports_unspent_budget() {
    let pacer = Pacer::new(100.0);
    let remaining = pacer.shortfall(10, Duration::from_nanos(400));
    assert_eq!(remaining, Duration::from_nanos(600));
}

/// Tests the shortfall when the host is slower than the modeled clock:
/// it floors at zero instead of going negative.
#[test]
fn shortfall_floors_at_zero() {
    let pacer = Pacer::new(100.0);
    let remaining = pacer.shortfall(10, Duration::from_micros(2));
    assert_eq!(remaining, Duration::ZERO);
}

/// Tests the boundary where the host spent exactly the budget.
#[test]
fn shortfall_of_exact_budget_is_zero() {
    let pacer = Pacer::new(100.0);
    let budget = pacer.budget(10);
    assert_eq!(pacer.shortfall(10, budget), Duration::ZERO);
}

/// Tests that the default pacer runs at the modeled hardware rate.
#[test]
fn default_rate_is_modeled_clock() {
    assert_eq!(Pacer::default(), Pacer::new(23.84));
}

proptest! {
    /// The shortfall can never exceed the budget it is measured against.
    #[test]
    fn shortfall_never_exceeds_budget(
        cycles in 0u32..=100_000,
        elapsed_ns in 0u64..=10_000_000,
    ) {
        let pacer = Pacer::default();
        let remaining = pacer.shortfall(cycles, Duration::from_nanos(elapsed_ns));
        prop_assert!(remaining <= pacer.budget(cycles));
    }

    /// Waiting out the reported shortfall always lands at or past the
    /// budget.
    #[test]
    fn elapsed_plus_shortfall_covers_budget(
        cycles in 0u32..=100_000,
        elapsed_ns in 0u64..=10_000_000,
    ) {
        let pacer = Pacer::default();
        let elapsed = Duration::from_nanos(elapsed_ns);
        let remaining = pacer.shortfall(cycles, elapsed);
        prop_assert!(elapsed + remaining >= pacer.budget(cycles));
    }
}

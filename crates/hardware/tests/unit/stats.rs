//! # Statistics Tests
//!
//! Counter accumulation and the instruction-mix bucketing behind the
//! end-of-run report.

use rstest::rstest;
use sm83_core::isa::instruction::Category;
use sm83_core::stats::SimStats;

/// Returns the mix bucket a category counts into.
fn bucket(stats: &SimStats, category: Category) -> u64 {
    match category {
        Category::Load => stats.inst_load,
        Category::Store => stats.inst_store,
        Category::Alu => stats.inst_alu,
        Category::Control => stats.inst_control,
        Category::Stack => stats.inst_stack,
    }
}

/// Tests that a fresh instance starts with every counter at zero.
#[test]
fn fresh_counters_are_zero() {
    let stats = SimStats::default();

    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.inst_control, 0);
    assert_eq!(stats.inst_stack, 0);
}

/// Tests that recording accumulates cycles and retirement across calls.
#[test]
fn record_accumulates() {
    let mut stats = SimStats::default();

    stats.record(Category::Alu, 4);
    stats.record(Category::Alu, 4);
    stats.record(Category::Load, 8);

    assert_eq!(stats.cycles, 16);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
}

/// Tests that each category lands in its own bucket and nowhere else.
#[rstest]
#[case(Category::Load)]
#[case(Category::Store)]
#[case(Category::Alu)]
#[case(Category::Control)]
#[case(Category::Stack)]
fn record_fills_one_bucket(#[case] category: Category) {
    let mut stats = SimStats::default();
    stats.record(category, 4);

    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(bucket(&stats, category), 1);

    let total = stats.inst_load + stats.inst_store + stats.inst_alu
        + stats.inst_control + stats.inst_stack;
    assert_eq!(total, 1);
}

/// Tests that the report handles a run with no retired instructions.
/// Every ratio in it divides by a retirement or cycle count.
#[test]
fn print_survives_empty_run() {
    let stats = SimStats::default();
    stats.print();
}

/// Tests the report on a populated run for good measure.
#[test]
fn print_survives_populated_run() {
    let mut stats = SimStats::default();
    stats.record(Category::Load, 8);
    stats.record(Category::Control, 12);
    stats.print();
}

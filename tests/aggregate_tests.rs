//! Engine-level tests for the aggregation reducer, driven through the
//! library API directly.

use chrono::NaiveDate;

use wagelog::core::aggregate::aggregate;
use wagelog::core::period::Period;
use wagelog::models::{AdvanceEntry, DayEntry, DayStatus, ExtraServiceEntry, WorkEntry};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(date: &str, status: DayStatus, rate: f64, overtime: Option<f64>) -> WorkEntry {
    WorkEntry::Day(DayEntry {
        date: d(date),
        status,
        rate,
        overtime,
        note: None,
    })
}

fn extra(id: &str, date: &str, price: f64) -> WorkEntry {
    WorkEntry::Extra(ExtraServiceEntry {
        id: id.to_string(),
        date: d(date),
        price,
        title: None,
        note: None,
    })
}

fn advance(id: &str, date: &str, amount: f64) -> AdvanceEntry {
    AdvanceEntry {
        id: id.to_string(),
        date: d(date),
        amount,
        note: None,
    }
}

/// The whole month of January 2025.
fn january() -> Period {
    Period::Month {
        year: 2025,
        month: 1,
    }
}

#[test]
fn all_worked_days_gross_is_count_times_rate() {
    let work: Vec<WorkEntry> = (1..=10)
        .map(|i| day(&format!("2025-01-{i:02}"), DayStatus::Worked, 250.0, None))
        .collect();

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.stats.days_worked, 10.0);
    assert_eq!(report.stats.gross_total, 10.0 * 250.0);
    assert_eq!(report.stats.final_total, 10.0 * 250.0);
}

#[test]
fn half_day_contributes_half_rate_and_half_day_count() {
    let work = vec![day("2025-01-06", DayStatus::HalfDay, 200.0, None)];

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.stats.days_worked, 0.5);
    assert_eq!(report.stats.total_from_days, 100.0);
}

#[test]
fn concrete_january_scenario() {
    let work = vec![
        day("2025-01-05", DayStatus::Worked, 200.0, None),
        day("2025-01-06", DayStatus::HalfDay, 200.0, Some(50.0)),
        day("2025-01-07", DayStatus::Missed, 200.0, None),
    ];
    let advances = vec![advance("a1", "2025-01-06", 100.0)];

    let report = aggregate(&work, &advances, &january());

    assert_eq!(report.stats.days_worked, 1.5);
    assert_eq!(report.stats.days_missed, 1);
    assert_eq!(report.stats.total_from_days, 300.0);
    assert_eq!(report.stats.total_from_overtime, 50.0);
    assert_eq!(report.stats.gross_total, 350.0);
    assert_eq!(report.stats.total_advances, 100.0);
    assert_eq!(report.stats.final_total, 250.0);
}

#[test]
fn final_total_goes_negative_when_advances_exceed_gross() {
    let work = vec![day("2025-01-05", DayStatus::Worked, 100.0, None)];
    let advances = vec![advance("a1", "2025-01-10", 300.0)];

    let report = aggregate(&work, &advances, &january());

    assert_eq!(report.stats.gross_total, 100.0);
    assert_eq!(report.stats.final_total, -200.0);
}

#[test]
fn empty_inputs_yield_all_zero_stats() {
    let report = aggregate(&[], &[], &january());

    assert_eq!(report.stats, Default::default());
    assert!(report.work.is_empty());
    assert!(report.advances.is_empty());
}

#[test]
fn day_off_counts_nothing_missed_counts_no_money() {
    let work = vec![
        day("2025-01-05", DayStatus::DayOff, 200.0, None),
        day("2025-01-06", DayStatus::Missed, 200.0, None),
    ];

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.stats.days_worked, 0.0);
    assert_eq!(report.stats.days_missed, 1);
    assert_eq!(report.stats.gross_total, 0.0);
}

#[test]
fn overtime_counts_regardless_of_day_status() {
    let work = vec![day("2025-01-07", DayStatus::Missed, 200.0, Some(25.0))];

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.stats.total_from_days, 0.0);
    assert_eq!(report.stats.total_from_overtime, 25.0);
    assert_eq!(report.stats.gross_total, 25.0);
}

#[test]
fn extras_sum_separately_from_days() {
    let work = vec![
        day("2025-01-05", DayStatus::Worked, 200.0, None),
        extra("x1", "2025-01-05", 80.0),
        extra("x2", "2025-01-05", 120.0),
    ];

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.stats.total_from_days, 200.0);
    assert_eq!(report.stats.total_from_extras, 200.0);
    assert_eq!(report.stats.gross_total, 400.0);
    // extras do not move the day counters
    assert_eq!(report.stats.days_worked, 1.0);
}

#[test]
fn inverted_custom_range_filters_everything() {
    let work = vec![day("2025-01-05", DayStatus::Worked, 200.0, None)];
    let advances = vec![advance("a1", "2025-01-05", 50.0)];

    let period = Period::Custom {
        start: d("2025-02-01"),
        end: d("2025-01-01"),
    };
    let report = aggregate(&work, &advances, &period);

    assert!(report.work.is_empty());
    assert!(report.advances.is_empty());
    assert_eq!(report.stats, Default::default());
}

#[test]
fn cycle_bound_is_inclusive() {
    let work = vec![
        day("2024-12-15", DayStatus::Worked, 200.0, None),
        day("2024-12-16", DayStatus::Worked, 200.0, None),
    ];

    let period = Period::Cycle {
        start: d("2024-12-16"),
    };
    let report = aggregate(&work, &[], &period);

    assert_eq!(report.work.len(), 1);
    assert_eq!(report.work[0].date(), d("2024-12-16"));
}

#[test]
fn month_filter_drops_other_months() {
    let work = vec![
        day("2024-12-31", DayStatus::Worked, 200.0, None),
        day("2025-01-01", DayStatus::Worked, 200.0, None),
        day("2025-02-01", DayStatus::Worked, 200.0, None),
    ];

    let report = aggregate(&work, &[], &january());

    assert_eq!(report.work.len(), 1);
    assert_eq!(report.stats.gross_total, 200.0);
}

#[test]
fn output_lists_are_sorted_by_date() {
    let work = vec![
        day("2025-01-20", DayStatus::Worked, 200.0, None),
        day("2025-01-03", DayStatus::Worked, 200.0, None),
        extra("x1", "2025-01-10", 50.0),
    ];
    let advances = vec![
        advance("a2", "2025-01-15", 10.0),
        advance("a1", "2025-01-02", 10.0),
    ];

    let report = aggregate(&work, &advances, &january());

    let dates: Vec<NaiveDate> = report.work.iter().map(|e| e.date()).collect();
    assert_eq!(dates, vec![d("2025-01-03"), d("2025-01-10"), d("2025-01-20")]);

    let adv_dates: Vec<NaiveDate> = report.advances.iter().map(|a| a.date).collect();
    assert_eq!(adv_dates, vec![d("2025-01-02"), d("2025-01-15")]);
}

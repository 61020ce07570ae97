//! Period parsing and resolution rules.

use chrono::{Datelike, NaiveDate};

use wagelog::core::period::{Period, fallback_cycle_start, parse_period};
use wagelog::models::UserSettings;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn parse_month_selector() {
    let period = parse_period("2025-01").unwrap();
    assert_eq!(
        period,
        Period::Month {
            year: 2025,
            month: 1
        }
    );
    assert!(period.contains(d("2025-01-31")));
    assert!(!period.contains(d("2025-02-01")));
    assert!(!period.contains(d("2024-01-15")));
}

#[test]
fn parse_range_selector() {
    let period = parse_period("2025-01-10:2025-01-20").unwrap();
    assert!(period.contains(d("2025-01-10")));
    assert!(period.contains(d("2025-01-20")));
    assert!(!period.contains(d("2025-01-09")));
    assert!(!period.contains(d("2025-01-21")));
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_period("yesterday").is_err());
    assert!(parse_period("2025-13").is_err());
    assert!(parse_period("2025-01-10:notadate").is_err());
}

#[test]
fn inverted_range_parses_but_matches_nothing() {
    let period = parse_period("2025-02-01:2025-01-01").unwrap();
    assert!(!period.contains(d("2025-01-15")));
    assert!(!period.contains(d("2025-02-01")));
}

#[test]
fn month_label_is_human_readable() {
    let period = Period::Month {
        year: 2025,
        month: 1,
    };
    assert_eq!(period.label(), "January 2025");
}

#[test]
fn cycle_label_names_the_start() {
    let period = Period::Cycle {
        start: d("2024-12-16"),
    };
    assert_eq!(period.label(), "since 2024-12-16");
}

#[test]
fn cycle_from_settings_uses_stored_start() {
    let mut settings = UserSettings::defaults();
    settings.billing_cycle_start = Some(d("2024-12-16"));

    let period = Period::cycle_from(&settings);
    assert_eq!(
        period,
        Period::Cycle {
            start: d("2024-12-16")
        }
    );
}

#[test]
fn cycle_falls_back_to_historical_date_when_unset() {
    let mut settings = UserSettings::defaults();
    settings.billing_cycle_start = None;

    let period = Period::cycle_from(&settings);
    assert_eq!(
        period,
        Period::Cycle {
            start: fallback_cycle_start()
        }
    );
}

#[test]
fn default_settings_open_the_cycle_at_month_start() {
    // merge default: first day of the current month
    let settings = UserSettings::defaults();
    let start = settings.billing_cycle_start.expect("default cycle start");
    assert_eq!(start.day0(), 0);
}

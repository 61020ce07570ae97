//! Local-store behavior: upsert semantics, settings merge, corruption
//! fallback, account purge rules.

mod common;

use chrono::NaiveDate;

use common::setup_test_db;
use wagelog::models::{
    AdvanceEntry, DayEntry, DayStatus, ExtraServiceEntry, UserSettings, WorkEntry,
};
use wagelog::store::Store;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(date: &str, status: DayStatus, rate: f64) -> WorkEntry {
    WorkEntry::Day(DayEntry {
        date: d(date),
        status,
        rate,
        overtime: None,
        note: None,
    })
}

fn open(name: &str) -> Store {
    Store::open(&setup_test_db(name)).expect("open store")
}

#[test]
fn day_entry_upsert_is_idempotent_per_date() {
    let store = open("upsert_day");

    let mut log = store.work_log();
    log.upsert(day("2025-03-10", DayStatus::Worked, 200.0));
    store.save_work_log(&log).unwrap();

    // a second record for the same date overwrites the first
    let mut log = store.work_log();
    log.upsert(day("2025-03-10", DayStatus::Missed, 200.0));
    store.save_work_log(&log).unwrap();

    let log = store.work_log();
    assert_eq!(log.len(), 1);
    match &log.entries()[0] {
        WorkEntry::Day(e) => assert_eq!(e.status, DayStatus::Missed),
        other => panic!("unexpected entry {other:?}"),
    }
}

#[test]
fn multiple_extras_share_a_date_without_collision() {
    let store = open("extras_same_date");

    let mut log = store.work_log();
    for i in 0..5 {
        log.upsert(WorkEntry::Extra(ExtraServiceEntry {
            id: format!("tok{i}"),
            date: d("2025-03-10"),
            price: 50.0,
            title: None,
            note: None,
        }));
    }
    store.save_work_log(&log).unwrap();

    assert_eq!(store.work_log().len(), 5);
}

#[test]
fn generated_extra_tokens_do_not_collide() {
    let store = open("extra_tokens");

    let mut log = store.work_log();
    for _ in 0..10 {
        log.upsert(WorkEntry::Extra(ExtraServiceEntry::new(
            d("2025-03-11"),
            75.0,
            None,
            None,
        )));
    }
    store.save_work_log(&log).unwrap();

    assert_eq!(store.work_log().len(), 10);
}

#[test]
fn settings_on_empty_store_are_all_defaults() {
    let store = open("settings_empty");
    assert_eq!(store.settings(), UserSettings::defaults());
}

#[test]
fn stored_partial_settings_override_only_their_fields() {
    let store = open("settings_partial");

    // simulate a record written by an older version that only knew
    // about the daily rate
    store
        .write_raw("settings", r#"{"daily_rate": 300.0}"#)
        .unwrap();

    let settings = store.settings();
    let defaults = UserSettings::defaults();

    assert_eq!(settings.daily_rate, 300.0);
    assert_eq!(settings.currency, defaults.currency);
    assert_eq!(settings.theme, defaults.theme);
    assert_eq!(settings.notification_time, defaults.notification_time);
}

#[test]
fn corrupted_payload_reads_as_empty_not_error() {
    let store = open("corrupted");

    store.write_raw("work_entries", "definitely-not-json").unwrap();
    store.write_raw("advances", "{\"an\": \"object, not a list\"}").unwrap();
    store.write_raw("settings", "[1,2,3]").unwrap();

    assert!(store.work_log().is_empty());
    assert!(store.advances().is_empty());
    assert_eq!(store.settings(), UserSettings::defaults());
}

#[test]
fn clear_account_data_preserves_notification_scalar() {
    let store = open("clear_keeps_scalar");

    let mut log = store.work_log();
    log.upsert(day("2025-03-10", DayStatus::Worked, 200.0));
    store.save_work_log(&log).unwrap();
    store
        .save_advances(&[AdvanceEntry::new(d("2025-03-10"), 50.0, None)])
        .unwrap();
    store.set_account_owner("user-1").unwrap();
    store.set_last_notification_date(d("2025-03-10")).unwrap();

    store.clear_account_data().unwrap();

    assert!(store.work_log().is_empty());
    assert!(store.advances().is_empty());
    assert_eq!(store.account_owner(), None);
    // device state survives the purge
    assert_eq!(store.last_notification_date(), Some(d("2025-03-10")));
}

#[test]
fn work_log_remove_by_id_handles_both_kinds() {
    let store = open("remove_by_id");

    let mut log = store.work_log();
    log.upsert(day("2025-03-10", DayStatus::Worked, 200.0));
    log.upsert(WorkEntry::Extra(ExtraServiceEntry {
        id: "tok1".to_string(),
        date: d("2025-03-10"),
        price: 40.0,
        title: None,
        note: None,
    }));

    assert!(log.remove("2025-03-10"));
    assert!(log.remove("tok1"));
    assert!(!log.remove("tok1"));
    assert!(log.is_empty());
}

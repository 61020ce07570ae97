//! Backup document round-trips and validation.

mod common;

use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use common::setup_test_db;
use wagelog::core::DataService;
use wagelog::errors::AppError;
use wagelog::models::{AdvanceEntry, DayEntry, DayStatus, ExpenseEntry, WorkEntry};
use wagelog::store::Store;
use wagelog::store::backup::{read_backup_file, write_backup_file};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn seed(store: &Store) {
    let service = DataService::local_only(store);

    service
        .save_work_entry(WorkEntry::Day(DayEntry {
            date: d("2025-01-05"),
            status: DayStatus::Worked,
            rate: 200.0,
            overtime: None,
            note: Some("site A".to_string()),
        }))
        .unwrap();
    service
        .save_advance(AdvanceEntry::new(d("2025-01-06"), 100.0, None))
        .unwrap();
    service
        .save_expense(ExpenseEntry::new(d("2025-01-07"), 15.0, None))
        .unwrap();

    let mut settings = service.settings();
    settings.daily_rate = 200.0;
    settings.worker_name = "Mario".to_string();
    service.save_settings(&settings).unwrap();
}

#[test]
fn export_import_round_trip_reproduces_data() {
    let src_store = Store::open(&setup_test_db("backup_src")).unwrap();
    seed(&src_store);
    let src = DataService::local_only(&src_store);

    let doc = src.export_document();
    let json = serde_json::to_string(&doc).unwrap();

    let dst_store = Store::open(&setup_test_db("backup_dst")).unwrap();
    let dst = DataService::local_only(&dst_store);
    dst.import_document(&json).unwrap();

    assert_eq!(
        dst.work_log().entries(),
        src.work_log().entries()
    );
    assert_eq!(dst.advances(), src.advances());
    assert_eq!(dst.expenses(), src.expenses());
    assert_eq!(dst.settings(), src.settings());
}

#[test]
fn import_rejects_document_missing_required_sections() {
    let store = Store::open(&setup_test_db("backup_invalid")).unwrap();
    seed(&store);
    let service = DataService::local_only(&store);

    // no advances, no settings
    let bad = r#"{"workEntries": []}"#;
    let err = service.import_document(bad).unwrap_err();
    assert!(matches!(err, AppError::InvalidBackup(_)));

    // rejection happens before any mutation: the seeded data is intact
    assert_eq!(service.work_log().len(), 1);
    assert_eq!(service.advances().len(), 1);
}

#[test]
fn import_accepts_old_documents_without_expenses() {
    let store = Store::open(&setup_test_db("backup_old")).unwrap();
    let service = DataService::local_only(&store);

    let old = r#"{
        "workEntries": [
            {"kind": "day", "date": "2025-01-05", "status": "worked",
             "rate": 200.0, "overtime": null, "note": null}
        ],
        "advances": [
            {"id": "a1", "date": "2025-01-06", "amount": 100.0, "note": null}
        ],
        "settings": {"daily_rate": 200.0}
    }"#;

    let doc = service.import_document(old).unwrap();
    assert!(doc.expenses.is_empty());

    assert_eq!(service.work_log().len(), 1);
    assert_eq!(service.advances().len(), 1);
    assert!(service.expenses().is_empty());
    assert_eq!(service.settings().daily_rate, 200.0);
}

#[test]
fn backup_file_round_trip_plain_and_zip() {
    let store = Store::open(&setup_test_db("backup_file")).unwrap();
    seed(&store);
    let service = DataService::local_only(&store);
    let doc = service.export_document();

    let mut plain: PathBuf = env::temp_dir();
    plain.push("wagelog_backup_plain.json");
    fs::remove_file(&plain).ok();

    let written = write_backup_file(&doc, &plain, false).unwrap();
    assert_eq!(written, plain);
    let json = read_backup_file(&written).unwrap();
    assert!(json.contains("workEntries"));

    let mut zipped: PathBuf = env::temp_dir();
    zipped.push("wagelog_backup_zipped.json");
    fs::remove_file(&zipped).ok();
    fs::remove_file(zipped.with_extension("zip")).ok();

    let written = write_backup_file(&doc, &zipped, true).unwrap();
    assert_eq!(written.extension().unwrap(), "zip");
    let json = read_backup_file(&written).unwrap();
    assert!(json.contains("workEntries"));
}

#[test]
fn exported_document_carries_version_and_timestamp() {
    let store = Store::open(&setup_test_db("backup_meta")).unwrap();
    let service = DataService::local_only(&store);

    let doc = service.export_document();
    assert_eq!(doc.app_version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    assert!(doc.exported_at.is_some());
}

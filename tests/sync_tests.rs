//! Sync adapter behavior with an in-memory remote: advisory pushes,
//! fetch-then-overwrite pulls, account-switch purge.

mod common;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use common::setup_test_db;
use wagelog::core::DataService;
use wagelog::errors::{AppError, AppResult};
use wagelog::models::{DayEntry, DayStatus, WorkEntry};
use wagelog::store::Store;
use wagelog::store::keys::Category;
use wagelog::sync::{Remote, Session, SyncOutcome};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(date: &str, rate: f64) -> WorkEntry {
    WorkEntry::Day(DayEntry {
        date: d(date),
        status: DayStatus::Worked,
        rate,
        overtime: None,
        note: None,
    })
}

fn session(user: &str) -> Session {
    Session {
        user_id: user.to_string(),
        access_token: "token".to_string(),
    }
}

/// In-memory remote keyed by (user_id, category).
#[derive(Default)]
struct MemoryRemote {
    rows: Mutex<HashMap<(String, String), String>>,
}

impl MemoryRemote {
    fn row(&self, user: &str, category: Category) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .get(&(user.to_string(), category.key().to_string()))
            .cloned()
    }

    fn put(&self, user: &str, category: Category, payload: &str) {
        self.rows.lock().unwrap().insert(
            (user.to_string(), category.key().to_string()),
            payload.to_string(),
        );
    }
}

impl Remote for MemoryRemote {
    fn push(&self, session: &Session, category: Category, payload: &str) -> AppResult<()> {
        self.put(&session.user_id, category, payload);
        Ok(())
    }

    fn pull_all(&self, session: &Session) -> AppResult<Vec<(Category, String)>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|((user, _), _)| user == &session.user_id)
            .filter_map(|((_, category), payload)| {
                Category::from_key(category).map(|c| (c, payload.clone()))
            })
            .collect())
    }
}

/// A remote that always fails, for offline scenarios.
struct DownRemote;

impl Remote for DownRemote {
    fn push(&self, _: &Session, _: Category, _: &str) -> AppResult<()> {
        Err(AppError::Sync("connection refused".to_string()))
    }

    fn pull_all(&self, _: &Session) -> AppResult<Vec<(Category, String)>> {
        Err(AppError::Sync("connection refused".to_string()))
    }
}

#[test]
fn save_without_session_defers_but_succeeds_locally() {
    let store = Store::open(&setup_test_db("sync_no_session")).unwrap();
    let remote = MemoryRemote::default();
    let service = DataService::new(&store, Some(&remote), None);

    let outcome = service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    assert_eq!(outcome, SyncOutcome::DeferredLocalOnly);
    assert_eq!(service.work_log().len(), 1);
    assert!(remote.row("u1", Category::WorkEntries).is_none());
}

#[test]
fn save_with_session_pushes_the_collection() {
    let store = Store::open(&setup_test_db("sync_push")).unwrap();
    let remote = MemoryRemote::default();
    let service = DataService::new(&store, Some(&remote), Some(session("u1")));

    let outcome = service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    assert_eq!(outcome, SyncOutcome::Applied);
    let pushed = remote.row("u1", Category::WorkEntries).expect("pushed payload");
    assert!(pushed.contains("2025-01-05"));
}

#[test]
fn push_failure_is_advisory_local_save_stands() {
    let store = Store::open(&setup_test_db("sync_down_push")).unwrap();
    let remote = DownRemote;
    let service = DataService::new(&store, Some(&remote), Some(session("u1")));

    let outcome = service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    assert_eq!(outcome, SyncOutcome::DeferredLocalOnly);
    assert_eq!(service.work_log().len(), 1);
}

#[test]
fn pull_overwrites_local_from_remote() {
    let store = Store::open(&setup_test_db("sync_pull")).unwrap();
    let remote = MemoryRemote::default();

    // another device pushed these earlier
    remote.put(
        "u1",
        Category::WorkEntries,
        r#"[{"kind":"day","date":"2025-02-01","status":"worked","rate":180.0,"overtime":null,"note":null}]"#,
    );
    remote.put("u1", Category::Advances, r#"[]"#);

    let service = DataService::new(&store, Some(&remote), Some(session("u1")));
    service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    let n = service.pull_all().unwrap();
    assert_eq!(n, 2);

    let log = service.work_log();
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].date(), d("2025-02-01"));
    assert_eq!(store.account_owner().as_deref(), Some("u1"));
}

#[test]
fn failed_pull_leaves_local_data_untouched() {
    let store = Store::open(&setup_test_db("sync_down_pull")).unwrap();
    let remote = DownRemote;
    let service = DataService::new(&store, Some(&remote), Some(session("u1")));

    service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    let err = service.pull_all().unwrap_err();
    assert!(matches!(err, AppError::Sync(_)));

    // offline-first: nothing was cleared ahead of the failed fetch
    assert_eq!(service.work_log().len(), 1);
}

#[test]
fn pull_without_session_is_an_error() {
    let store = Store::open(&setup_test_db("sync_pull_anon")).unwrap();
    let remote = MemoryRemote::default();
    let service = DataService::new(&store, Some(&remote), None);

    assert!(matches!(service.pull_all(), Err(AppError::NoSession)));
}

#[test]
fn switching_accounts_purges_the_previous_users_data() {
    let db = setup_test_db("sync_switch");
    let store = Store::open(&db).unwrap();
    let remote = MemoryRemote::default();

    // first user works and pulls on this device
    {
        let service = DataService::new(&store, Some(&remote), Some(session("u1")));
        service.save_work_entry(day("2025-01-05", 200.0)).unwrap();
        service.pull_all().unwrap();
        assert_eq!(store.account_owner().as_deref(), Some("u1"));
    }

    store.set_last_notification_date(d("2025-01-05")).unwrap();

    // second user signs in; they have no remote rows yet
    {
        let service = DataService::new(&store, Some(&remote), Some(session("u2")));
        let n = service.pull_all().unwrap();
        assert_eq!(n, 0);

        // u1's entries are gone, u2 starts clean
        assert!(service.work_log().is_empty());
        assert_eq!(store.account_owner().as_deref(), Some("u2"));
        // device-level reminder state is not account data
        assert_eq!(store.last_notification_date(), Some(d("2025-01-05")));
    }
}

#[test]
fn new_account_with_no_remote_rows_pulls_successfully() {
    let store = Store::open(&setup_test_db("sync_empty_pull")).unwrap();
    let remote = MemoryRemote::default();
    let service = DataService::new(&store, Some(&remote), Some(session("u1")));

    assert_eq!(service.pull_all().unwrap(), 0);
}

#[test]
fn partial_push_is_per_category() {
    let store = Store::open(&setup_test_db("sync_partial")).unwrap();
    let remote = MemoryRemote::default();
    let service = DataService::new(&store, Some(&remote), Some(session("u1")));

    service.save_work_entry(day("2025-01-05", 200.0)).unwrap();

    // only the touched collection was mirrored
    assert!(remote.row("u1", Category::WorkEntries).is_some());
    assert!(remote.row("u1", Category::Advances).is_none());

    // an explicit push mirrors everything, including empty collections
    let results = service.push_all();
    assert!(results.iter().all(|(_, o)| o.is_applied()));
    assert!(remote.row("u1", Category::Advances).is_some());
    assert!(remote.row("u1", Category::Settings).is_some());
}

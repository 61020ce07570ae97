//! DataService: the read/write/aggregate API the command layer calls.
//!
//! Session and remote are explicit context passed in at construction, so
//! every operation is testable without ambient state. Each write lands
//! locally first and then attempts a best-effort push of the collection
//! it touched; the returned `SyncOutcome` says which of the two happened.

use chrono::NaiveDate;

use crate::core::aggregate::{PeriodReport, aggregate};
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::models::{AdvanceEntry, ExpenseEntry, UserSettings, WorkEntry, WorkLog};
use crate::store::Store;
use crate::store::backup::{self, BackupDocument};
use crate::store::keys::Category;
use crate::sync::{Remote, Session, SyncOutcome, push_collection};
use crate::utils::date::today;

pub struct DataService<'a> {
    store: &'a Store,
    remote: Option<&'a dyn Remote>,
    session: Option<Session>,
}

impl<'a> DataService<'a> {
    pub fn new(store: &'a Store, remote: Option<&'a dyn Remote>, session: Option<Session>) -> Self {
        Self {
            store,
            remote,
            session,
        }
    }

    /// A service with no remote side: every write is local-only.
    pub fn local_only(store: &'a Store) -> Self {
        Self::new(store, None, None)
    }

    pub fn store(&self) -> &Store {
        self.store
    }

    // ---------------------------
    // Reads
    // ---------------------------

    pub fn work_log(&self) -> WorkLog {
        self.store.work_log()
    }

    pub fn advances(&self) -> Vec<AdvanceEntry> {
        self.store.advances()
    }

    pub fn expenses(&self) -> Vec<ExpenseEntry> {
        self.store.expenses()
    }

    pub fn settings(&self) -> UserSettings {
        self.store.settings()
    }

    pub fn report(&self, period: &Period) -> PeriodReport {
        aggregate(
            &self.work_log().entries(),
            &self.advances(),
            period,
        )
    }

    // ---------------------------
    // Writes (local first, then advisory push)
    // ---------------------------

    pub fn save_work_entry(&self, entry: WorkEntry) -> AppResult<SyncOutcome> {
        let mut log = self.store.work_log();
        log.upsert(entry);
        let payload = self.store.save_work_log(&log)?;
        Ok(self.push(Category::WorkEntries, &payload))
    }

    pub fn delete_work_entry(&self, id: &str) -> AppResult<SyncOutcome> {
        let mut log = self.store.work_log();
        if !log.remove(id) {
            return Err(AppError::EntryNotFound(id.to_string()));
        }
        let payload = self.store.save_work_log(&log)?;
        Ok(self.push(Category::WorkEntries, &payload))
    }

    pub fn save_advance(&self, entry: AdvanceEntry) -> AppResult<SyncOutcome> {
        let mut list = self.store.advances();
        upsert_by_id(&mut list, entry, |e| e.id.clone());
        let payload = self.store.save_advances(&list)?;
        Ok(self.push(Category::Advances, &payload))
    }

    pub fn delete_advance(&self, id: &str) -> AppResult<SyncOutcome> {
        let mut list = self.store.advances();
        let before = list.len();
        list.retain(|e| e.id != id);
        if list.len() == before {
            return Err(AppError::EntryNotFound(id.to_string()));
        }
        let payload = self.store.save_advances(&list)?;
        Ok(self.push(Category::Advances, &payload))
    }

    pub fn save_expense(&self, entry: ExpenseEntry) -> AppResult<SyncOutcome> {
        let mut list = self.store.expenses();
        upsert_by_id(&mut list, entry, |e| e.id.clone());
        let payload = self.store.save_expenses(&list)?;
        Ok(self.push(Category::Expenses, &payload))
    }

    pub fn delete_expense(&self, id: &str) -> AppResult<SyncOutcome> {
        let mut list = self.store.expenses();
        let before = list.len();
        list.retain(|e| e.id != id);
        if list.len() == before {
            return Err(AppError::EntryNotFound(id.to_string()));
        }
        let payload = self.store.save_expenses(&list)?;
        Ok(self.push(Category::Expenses, &payload))
    }

    pub fn save_settings(&self, settings: &UserSettings) -> AppResult<SyncOutcome> {
        let payload = self.store.save_settings(settings)?;
        Ok(self.push(Category::Settings, &payload))
    }

    /// Close the open billing cycle: move its start to today. Underlying
    /// entries are untouched and stay visible in month/custom reports.
    pub fn close_cycle(&self) -> AppResult<(NaiveDate, SyncOutcome)> {
        let mut settings = self.settings();
        let start = today();
        settings.billing_cycle_start = Some(start);
        let outcome = self.save_settings(&settings)?;
        Ok((start, outcome))
    }

    fn push(&self, category: Category, payload: &str) -> SyncOutcome {
        push_collection(
            self.remote,
            self.session.as_ref(),
            self.store,
            category,
            payload,
        )
    }

    // ---------------------------
    // Whole-account sync
    // ---------------------------

    /// Mirror every collection to the remote as-is.
    pub fn push_all(&self) -> Vec<(Category, SyncOutcome)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let payload = self.store.collection_payload(category);
                (category, self.push(category, &payload))
            })
            .collect()
    }

    /// Fetch every remote category and overwrite the local copies.
    ///
    /// Local data is never cleared ahead of the fetch: when the remote is
    /// unreachable this returns an error and the device keeps whatever it
    /// had. Only after the read has concretely succeeded is anything
    /// overwritten; switching accounts additionally purges the previous
    /// user's cached data at that point. A user with no remote rows yet
    /// pulls successfully with zero categories.
    pub fn pull_all(&self) -> AppResult<usize> {
        let session = self.session.as_ref().ok_or(AppError::NoSession)?;
        let remote = self.remote.ok_or(AppError::NoRemote)?;

        let rows = remote.pull_all(session)?;

        if self.store.account_owner().as_deref() != Some(session.user_id.as_str()) {
            self.store.clear_account_data()?;
        }

        for (category, payload) in &rows {
            self.store.write_raw(category.key(), payload)?;
        }
        self.store.set_account_owner(&session.user_id)?;
        self.store
            .log_op("sync", "pull", &format!("{} categories", rows.len()));

        Ok(rows.len())
    }

    /// Drop the session and purge the account's local data, so the next
    /// login cannot see the previous user's entries.
    pub fn logout(&self) -> AppResult<()> {
        Session::clear()?;
        self.store.clear_account_data()?;
        self.store.log_op("auth", "logout", "session cleared, local data purged");
        Ok(())
    }

    // ---------------------------
    // Backup / restore
    // ---------------------------

    pub fn export_document(&self) -> BackupDocument {
        backup::export_document(self.store)
    }

    /// Validate, overwrite local collections, then push each category
    /// best-effort. Remote failures never fail the restore.
    pub fn import_document(&self, json: &str) -> AppResult<BackupDocument> {
        let doc = backup::parse_document(json)?;
        backup::apply_document(self.store, &doc)?;

        for category in Category::ALL {
            let payload = self.store.collection_payload(category);
            self.push(category, &payload);
        }

        Ok(doc)
    }
}

fn upsert_by_id<T, K: PartialEq>(list: &mut Vec<T>, entry: T, key: impl Fn(&T) -> K) {
    let id = key(&entry);
    if let Some(existing) = list.iter_mut().find(|e| key(e) == id) {
        *existing = entry;
    } else {
        list.push(entry);
    }
}

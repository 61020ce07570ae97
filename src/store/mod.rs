//! Local store: one SQLite database holding each collection as a JSON
//! payload in a `kv` table, plus an operation log and schema migrations.
//!
//! Read paths never fail: a missing or unparsable payload degrades to an
//! empty collection (or default settings). Write paths rewrite the whole
//! collection payload, so same-device writes are last-write-wins at the
//! collection level.

pub mod backup;
pub mod keys;
pub mod migrate;
pub mod oplog;

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppResult;
use crate::models::{
    AdvanceEntry, ExpenseEntry, PartialSettings, UserSettings, WorkEntry, WorkLog,
};
use keys::{Category, KEY_ACCOUNT_OWNER, KEY_LAST_NOTIFICATION};

pub struct Store {
    pub conn: Connection,
}

impl Store {
    /// Open (or create) the local database and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        migrate::run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    // ---------------------------
    // Raw key/value access
    // ---------------------------

    /// Read a payload. Absent key or query failure both read as `None`.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        self.conn
            .query_row("SELECT payload FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .ok()
            .flatten()
    }

    pub fn write_raw(&self, key: &str, payload: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, payload, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET payload = ?2, updated_at = ?3",
            params![key, payload, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn delete_key(&self, key: &str) -> AppResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        // corrupted payload → empty list, never an error
        self.read_raw(key)
            .and_then(|p| serde_json::from_str(&p).ok())
            .unwrap_or_default()
    }

    fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> AppResult<String> {
        let payload = serde_json::to_string(list)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
        self.write_raw(key, &payload)?;
        Ok(payload)
    }

    // ---------------------------
    // Typed collections
    // ---------------------------

    pub fn work_log(&self) -> WorkLog {
        WorkLog::from_entries(self.read_list::<WorkEntry>(Category::WorkEntries.key()))
    }

    pub fn advances(&self) -> Vec<AdvanceEntry> {
        self.read_list(Category::Advances.key())
    }

    pub fn expenses(&self) -> Vec<ExpenseEntry> {
        self.read_list(Category::Expenses.key())
    }

    /// Stored partial record overlaid on hard-coded defaults.
    pub fn settings(&self) -> UserSettings {
        let partial: PartialSettings = self
            .read_raw(Category::Settings.key())
            .and_then(|p| serde_json::from_str(&p).ok())
            .unwrap_or_default();
        UserSettings::merged(partial)
    }

    /// Persist the whole work log; returns the serialized payload so the
    /// caller can hand it to the sync adapter.
    pub fn save_work_log(&self, log: &WorkLog) -> AppResult<String> {
        self.write_list(Category::WorkEntries.key(), &log.entries())
    }

    pub fn save_advances(&self, list: &[AdvanceEntry]) -> AppResult<String> {
        self.write_list(Category::Advances.key(), list)
    }

    pub fn save_expenses(&self, list: &[ExpenseEntry]) -> AppResult<String> {
        self.write_list(Category::Expenses.key(), list)
    }

    /// Overwrite the settings record wholesale.
    pub fn save_settings(&self, settings: &UserSettings) -> AppResult<String> {
        let payload = serde_json::to_string(settings)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
        self.write_raw(Category::Settings.key(), &payload)?;
        Ok(payload)
    }

    /// Current payload of a category, with the empty form when unset.
    /// Used by `sync --push` to mirror every collection as-is.
    pub fn collection_payload(&self, category: Category) -> String {
        let empty = match category {
            Category::Settings => "{}",
            _ => "[]",
        };
        self.read_raw(category.key())
            .unwrap_or_else(|| empty.to_string())
    }

    // ---------------------------
    // Scalars
    // ---------------------------

    pub fn last_notification_date(&self) -> Option<NaiveDate> {
        self.read_raw(KEY_LAST_NOTIFICATION)
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
    }

    pub fn set_last_notification_date(&self, date: NaiveDate) -> AppResult<()> {
        self.write_raw(KEY_LAST_NOTIFICATION, &date.format("%Y-%m-%d").to_string())
    }

    /// User id the cached collections belong to.
    pub fn account_owner(&self) -> Option<String> {
        self.read_raw(KEY_ACCOUNT_OWNER)
    }

    pub fn set_account_owner(&self, user_id: &str) -> AppResult<()> {
        self.write_raw(KEY_ACCOUNT_OWNER, user_id)
    }

    /// Erase the account's collections and ownership marker.
    /// The last-notification scalar is device state and survives.
    pub fn clear_account_data(&self) -> AppResult<()> {
        for category in Category::ALL {
            self.delete_key(category.key())?;
        }
        self.delete_key(KEY_ACCOUNT_OWNER)?;
        Ok(())
    }

    /// Best-effort operation log (init/sync/backup/...); never blocks the
    /// caller on failure.
    pub fn log_op(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = oplog::append(&self.conn, operation, target, message) {
            crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
        }
    }
}

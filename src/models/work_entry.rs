use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::DayStatus;

/// One compensation record for a calendar day. The date is the identity:
/// saving a second entry for the same date replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub status: DayStatus,
    /// Daily-rate snapshot copied from settings at save time. Changing the
    /// rate later must not retroactively alter past entries.
    pub rate: f64,
    pub overtime: Option<f64>,
    pub note: Option<String>,
}

/// A paid extra service. Unlike day entries, any number of these may share
/// the same date, so each carries its own generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraServiceEntry {
    pub id: String,
    pub date: NaiveDate,
    pub price: f64,
    pub title: Option<String>,
    pub note: Option<String>,
}

impl ExtraServiceEntry {
    pub fn new(
        date: NaiveDate,
        price: f64,
        title: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: new_entry_token(),
            date,
            price,
            title,
            note,
        }
    }
}

static TOKEN_SEQ: AtomicU64 = AtomicU64::new(0);

/// Millisecond-timestamp token for entries without a natural key.
/// A process-local sequence breaks ties within the same millisecond.
pub fn new_entry_token() -> String {
    let seq = TOKEN_SEQ.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{}{:03}", chrono::Utc::now().timestamp_millis(), seq)
}

/// A work entry is either a day record or an extra service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkEntry {
    Day(DayEntry),
    Extra(ExtraServiceEntry),
}

impl WorkEntry {
    /// Stable identifier: the ISO date for day entries, the generated
    /// token for extra services.
    pub fn id(&self) -> String {
        match self {
            WorkEntry::Day(d) => d.date.format("%Y-%m-%d").to_string(),
            WorkEntry::Extra(x) => x.id.clone(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            WorkEntry::Day(d) => d.date,
            WorkEntry::Extra(x) => x.date,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            WorkEntry::Day(d) => d.note.as_deref(),
            WorkEntry::Extra(x) => x.note.as_deref(),
        }
    }
}

/// In-memory work-entry collection.
///
/// The "one day record per date" rule is structural: day entries live in a
/// map keyed by date, extra services in a separate list. The flat
/// `Vec<WorkEntry>` form only exists at the serialization boundary.
#[derive(Debug, Clone, Default)]
pub struct WorkLog {
    days: BTreeMap<NaiveDate, DayEntry>,
    extras: Vec<ExtraServiceEntry>,
}

impl WorkLog {
    /// Rebuild from a flat entry list (stored payload). A duplicate date
    /// among day entries keeps the later one, mirroring upsert semantics.
    pub fn from_entries(entries: Vec<WorkEntry>) -> Self {
        let mut log = WorkLog::default();
        for e in entries {
            log.upsert(e);
        }
        log
    }

    /// Insert or replace by identity: day entries by date, extras by id.
    pub fn upsert(&mut self, entry: WorkEntry) {
        match entry {
            WorkEntry::Day(d) => {
                self.days.insert(d.date, d);
            }
            WorkEntry::Extra(x) => {
                if let Some(existing) = self.extras.iter_mut().find(|e| e.id == x.id) {
                    *existing = x;
                } else {
                    self.extras.push(x);
                }
            }
        }
    }

    /// Remove by id. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        if let Ok(date) = NaiveDate::parse_from_str(id, "%Y-%m-%d") {
            return self.days.remove(&date).is_some();
        }
        let before = self.extras.len();
        self.extras.retain(|e| e.id != id);
        self.extras.len() != before
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&date)
    }

    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.extras.is_empty()
    }

    /// Flat view sorted ascending by date (day entries before extras on
    /// the same date).
    pub fn entries(&self) -> Vec<WorkEntry> {
        let mut out: Vec<WorkEntry> = self
            .days
            .values()
            .cloned()
            .map(WorkEntry::Day)
            .collect();
        out.extend(self.extras.iter().cloned().map(WorkEntry::Extra));
        out.sort_by_key(|e| e.date());
        out
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::work_entry::new_entry_token;

/// Cash given to the worker ahead of settlement, deducted from final pay.
/// Any number of advances may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceEntry {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub note: Option<String>,
}

impl AdvanceEntry {
    pub fn new(date: NaiveDate, amount: f64, note: Option<String>) -> Self {
        Self {
            id: new_entry_token(),
            date,
            amount,
            note,
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::work_entry::new_entry_token;

/// Incidental expense, tracked for the worker's own bookkeeping.
/// Deliberately excluded from period reports and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub note: Option<String>,
}

impl ExpenseEntry {
    pub fn new(date: NaiveDate, amount: f64, note: Option<String>) -> Self {
        Self {
            id: new_entry_token(),
            date,
            amount,
            note,
        }
    }
}

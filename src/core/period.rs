//! Period selection: the three reporting windows and how each resolves to
//! a date predicate.

use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};
use crate::models::UserSettings;
use crate::utils::date::{month_name, previous_month, today};

/// Used when settings carry no billing-cycle start at all.
pub fn fallback_cycle_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Same calendar month and year.
    Month { year: i32, month: u32 },
    /// Inclusive date range. A start after the end matches nothing.
    Custom { start: NaiveDate, end: NaiveDate },
    /// Open lower bound: everything since the last payout reset.
    Cycle { start: NaiveDate },
}

impl Period {
    pub fn current_month() -> Self {
        let t = today();
        Period::Month {
            year: t.year(),
            month: t.month(),
        }
    }

    pub fn last_month() -> Self {
        let t = today();
        let (year, month) = previous_month(t.year(), t.month());
        Period::Month { year, month }
    }

    /// Cycle window from settings, falling back to the historical default.
    pub fn cycle_from(settings: &UserSettings) -> Self {
        Period::Cycle {
            start: settings
                .billing_cycle_start
                .unwrap_or_else(fallback_cycle_start),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Period::Month { year, month } => {
                date.year() == *year && date.month() == *month
            }
            Period::Custom { start, end } => *start <= date && date <= *end,
            Period::Cycle { start } => date >= *start,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::Month { year, month } => format!("{} {}", month_name(*month), year),
            Period::Custom { start, end } => format!("{} → {}", start, end),
            Period::Cycle { start } => format!("since {}", start),
        }
    }
}

/// Parse the CLI period argument.
///
/// Supports:
/// - YYYY-MM (calendar month)
/// - YYYY-MM-DD:YYYY-MM-DD (custom inclusive range)
pub fn parse_period(s: &str) -> AppResult<Period> {
    if let Some((start_raw, end_raw)) = s.split_once(':') {
        let start = NaiveDate::parse_from_str(start_raw.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
        let end = NaiveDate::parse_from_str(end_raw.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;

        // an inverted range is representable and simply matches nothing
        return Ok(Period::Custom { start, end });
    }

    if s.len() == 7 {
        let year: i32 = s[0..4]
            .parse()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
        let month: u32 = s[5..7]
            .parse()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidPeriod(s.to_string()));
        }
        return Ok(Period::Month { year, month });
    }

    Err(AppError::InvalidPeriod(s.to_string()))
}

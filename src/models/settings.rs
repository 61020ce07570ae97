use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::date::first_day_of_current_month;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Per-account settings, stored as a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub daily_rate: f64,
    pub worker_name: String,
    pub employer_name: String,
    pub currency: String,
    pub theme: Theme,
    pub notification_enabled: bool,
    /// "HH:MM"
    pub notification_time: String,
    /// Start of the currently-open, not-yet-paid period.
    pub billing_cycle_start: Option<NaiveDate>,
}

impl UserSettings {
    /// Hard-coded defaults. These act as the base layer for every load:
    /// a settings record written by an older version always reads back
    /// with usable values for fields it predates.
    pub fn defaults() -> Self {
        Self {
            daily_rate: 0.0,
            worker_name: String::new(),
            employer_name: String::new(),
            currency: "€".to_string(),
            theme: Theme::Light,
            notification_enabled: false,
            notification_time: "09:00".to_string(),
            billing_cycle_start: Some(first_day_of_current_month()),
        }
    }

    /// Defaults overlaid by a stored partial record.
    pub fn merged(partial: PartialSettings) -> Self {
        let base = Self::defaults();
        Self {
            daily_rate: partial.daily_rate.unwrap_or(base.daily_rate),
            worker_name: partial.worker_name.unwrap_or(base.worker_name),
            employer_name: partial.employer_name.unwrap_or(base.employer_name),
            currency: partial.currency.unwrap_or(base.currency),
            theme: partial.theme.unwrap_or(base.theme),
            notification_enabled: partial
                .notification_enabled
                .unwrap_or(base.notification_enabled),
            notification_time: partial
                .notification_time
                .unwrap_or(base.notification_time),
            billing_cycle_start: partial.billing_cycle_start.or(base.billing_cycle_start),
        }
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Stored shape of the settings record: every field optional, so a payload
/// from any past (or future) version still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub worker_name: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub notification_enabled: Option<bool>,
    #[serde(default)]
    pub notification_time: Option<String>,
    #[serde(default)]
    pub billing_cycle_start: Option<NaiveDate>,
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Status of a calendar day. A date carries at most one of these;
/// paid extra services are tracked as separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Worked,
    HalfDay,
    Missed,
    DayOff,
}

impl DayStatus {
    /// Stable string form used in stored payloads and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Worked => "worked",
            DayStatus::HalfDay => "half_day",
            DayStatus::Missed => "missed",
            DayStatus::DayOff => "day_off",
        }
    }

}

/// Human-readable label for list/report outputs.
pub fn describe_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Worked => "Worked",
        DayStatus::HalfDay => "Half day",
        DayStatus::Missed => "Missed",
        DayStatus::DayOff => "Day off",
    }
}

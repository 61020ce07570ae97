use serde::{Deserialize, Serialize};

/// Derived financial summary for a period. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Fractional: a half day contributes 0.5.
    pub days_worked: f64,
    pub days_missed: u32,
    pub total_from_days: f64,
    pub total_from_overtime: f64,
    pub total_from_extras: f64,
    /// days + overtime + extras
    pub gross_total: f64,
    pub total_advances: f64,
    /// gross - advances; negative when the worker owes money back.
    pub final_total: f64,
}

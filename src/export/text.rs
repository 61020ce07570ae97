use std::path::Path;

use crate::core::aggregate::PeriodReport;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::UserSettings;
use crate::utils::format_amount;

/// Compact plain-text summary, written to paste into a chat message.
pub fn build_share_message(report: &PeriodReport, settings: &UserSettings) -> String {
    let c = &settings.currency;
    let mut out = String::new();

    out.push_str(&format!("Work report — {}\n", report.label));
    if !settings.worker_name.is_empty() {
        out.push_str(&format!("Worker: {}\n", settings.worker_name));
    }
    if !settings.employer_name.is_empty() {
        out.push_str(&format!("Employer: {}\n", settings.employer_name));
    }
    out.push('\n');

    out.push_str(&format!("Days worked: {}\n", report.stats.days_worked));
    out.push_str(&format!("Days missed: {}\n", report.stats.days_missed));
    out.push_str(&format!(
        "Pay for days: {}\n",
        format_amount(report.stats.total_from_days, c)
    ));
    out.push_str(&format!(
        "Overtime: {}\n",
        format_amount(report.stats.total_from_overtime, c)
    ));
    out.push_str(&format!(
        "Extra services: {}\n",
        format_amount(report.stats.total_from_extras, c)
    ));
    out.push_str(&format!(
        "Gross total: {}\n",
        format_amount(report.stats.gross_total, c)
    ));
    out.push_str(&format!(
        "Advances taken: {}\n",
        format_amount(report.stats.total_advances, c)
    ));
    out.push_str(&format!(
        "Final total: {}\n",
        format_amount(report.stats.final_total, c)
    ));

    out
}

pub(crate) fn write_text(
    report: &PeriodReport,
    settings: &UserSettings,
    path: &Path,
) -> AppResult<()> {
    std::fs::write(path, build_share_message(report, settings))?;
    notify_export_success("Text", path);
    Ok(())
}

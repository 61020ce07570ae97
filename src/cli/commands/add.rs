use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::status::describe_status;
use crate::models::{DayEntry, WorkEntry};
use crate::sync::SyncOutcome;
use crate::ui::messages::{note, success};
use crate::utils::date;
use crate::utils::money::{format_amount, parse_amount};

/// Record (or overwrite) the status of a work day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        status,
        rate,
        overtime,
        note: day_note,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        //
        // 2. Optional amounts
        //
        let rate_override = rate.as_deref().map(parse_amount).transpose()?;
        let overtime_value = overtime.as_deref().map(parse_amount).transpose()?;

        with_service(cfg, |service| {
            let settings = service.settings();

            if let Some(existing) = service.work_log().day(d) {
                note(format!(
                    "Replacing the existing {} record for {}.",
                    describe_status(existing.status).to_lowercase(),
                    d
                ));
            }

            // snapshot the rate now: later settings changes must not
            // touch this day
            let rate_snapshot = rate_override.unwrap_or(settings.daily_rate);

            let entry = WorkEntry::Day(DayEntry {
                date: d,
                status: *status,
                rate: rate_snapshot,
                overtime: overtime_value,
                note: day_note.clone(),
            });

            let outcome = service.save_work_entry(entry)?;

            let label = describe_status(*status);
            success(format!(
                "{} recorded for {} (rate {})",
                label,
                d,
                format_amount(rate_snapshot, &settings.currency)
            ));
            if outcome == SyncOutcome::DeferredLocalOnly {
                note("Saved locally; remote sync deferred.");
            }
            Ok(())
        })?;
    }

    Ok(())
}

use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{ExtraServiceEntry, WorkEntry};
use crate::sync::SyncOutcome;
use crate::ui::messages::{note, success};
use crate::utils::date;
use crate::utils::money::{format_amount, parse_amount};

/// Record a paid extra service. Several can share the same date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extra {
        date: date_str,
        price,
        title,
        note: extra_note,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let price_value = parse_amount(price)?;
        if price_value == 0.0 {
            return Err(AppError::InvalidAmount(price.to_string()));
        }

        with_service(cfg, |service| {
            let settings = service.settings();
            let entry =
                ExtraServiceEntry::new(d, price_value, title.clone(), extra_note.clone());
            let id = entry.id.clone();

            let outcome = service.save_work_entry(WorkEntry::Extra(entry))?;

            success(format!(
                "Extra service recorded for {} ({}) [id {}]",
                d,
                format_amount(price_value, &settings.currency),
                id
            ));
            if outcome == SyncOutcome::DeferredLocalOnly {
                note("Saved locally; remote sync deferred.");
            }
            Ok(())
        })?;
    }

    Ok(())
}

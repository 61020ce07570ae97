use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ExpenseEntry;
use crate::sync::SyncOutcome;
use crate::ui::messages::{note, success};
use crate::utils::date;
use crate::utils::money::{format_amount, parse_amount};

/// Record an incidental expense. Kept out of the pay report on purpose.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Expense {
        date: date_str,
        amount,
        note: expense_note,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let amount_value = parse_amount(amount)?;
        if amount_value == 0.0 {
            return Err(AppError::InvalidAmount(amount.to_string()));
        }

        with_service(cfg, |service| {
            let settings = service.settings();
            let entry = ExpenseEntry::new(d, amount_value, expense_note.clone());
            let id = entry.id.clone();

            let outcome = service.save_expense(entry)?;

            success(format!(
                "Expense recorded for {} ({}) [id {}]",
                d,
                format_amount(amount_value, &settings.currency),
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

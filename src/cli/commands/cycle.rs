use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::Period;
use crate::errors::AppResult;
use crate::sync::SyncOutcome;
use crate::ui::messages::{confirm, info, note, success};
use crate::utils::money::format_amount;

/// Show the open billing cycle, or close it by moving its start to today.
/// Closing never deletes entries: they stay reachable in month and range
/// reports.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cycle { close, yes } = cmd {
        with_service(cfg, |service| {
            let settings = service.settings();
            let period = Period::cycle_from(&settings);
            let report = service.report(&period);

            if !*close {
                info(format!("Open billing cycle: {}", period.label()));
                println!(
                    "  {} work entries, final total {}",
                    report.work.len(),
                    format_amount(report.stats.final_total, &settings.currency)
                );
                return Ok(());
            }

            if !*yes {
                let prompt = format!(
                    "Close the cycle {} (final total {})? The new cycle starts today.",
                    period.label(),
                    format_amount(report.stats.final_total, &settings.currency)
                );
                if !confirm(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }

            let (start, outcome) = service.close_cycle()?;
            success(format!("Billing cycle closed. New cycle starts {}.", start));
            if outcome == SyncOutcome::DeferredLocalOnly {
                note("Saved locally; remote sync deferred.");
            }
            Ok(())
        })?;
    }

    Ok(())
}

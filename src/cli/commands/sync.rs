use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sync::SyncOutcome;
use crate::ui::messages::{success, warning};

/// Explicit full resync: `--push` mirrors every local collection to the
/// remote, `--pull` overwrites local data from the remote.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { push, pull } = cmd {
        if !*push && !*pull {
            return Err(AppError::Config(
                "sync needs --push or --pull".to_string(),
            ));
        }

        with_service(cfg, |service| {
            if *push {
                let results = service.push_all();
                let deferred: Vec<&str> = results
                    .iter()
                    .filter(|(_, outcome)| *outcome == SyncOutcome::DeferredLocalOnly)
                    .map(|(category, _)| category.key())
                    .collect();

                if deferred.is_empty() {
                    success("All collections pushed to remote.");
                } else {
                    warning(format!(
                        "Kept local (not pushed): {}",
                        deferred.join(", ")
                    ));
                }
            }

            if *pull {
                let n = service.pull_all()?;
                success(format!("Fetched {} collections from remote.", n));
            }

            Ok(())
        })?;
    }

    Ok(())
}

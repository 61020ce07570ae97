use crate::cli::commands::with_service;
use crate::cli::parser::{Commands, EntryKind};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { kind, id, yes } = cmd {
        let what = match kind {
            EntryKind::Work => "work entry",
            EntryKind::Advance => "advance",
            EntryKind::Expense => "expense",
        };

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete {} '{}'? This action is irreversible.",
                what, id
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        with_service(cfg, |service| {
            match kind {
                EntryKind::Work => service.delete_work_entry(id)?,
                EntryKind::Advance => service.delete_advance(id)?,
                EntryKind::Expense => service.delete_expense(id)?,
            };
            success(format!("Deleted {} '{}'.", what, id));
            Ok(())
        })?;
    }

    Ok(())
}

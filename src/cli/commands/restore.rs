use std::path::Path;

use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::backup::read_backup_file;
use crate::ui::messages::{confirm, info, success};

/// Restore a backup document. The document is validated in full before
/// anything is written; remote push failures never fail the restore.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let json = read_backup_file(Path::new(file))?;

        if !*yes
            && !confirm("Restoring a backup overwrites all local entries and settings.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        with_service(cfg, |service| {
            let doc = service.import_document(&json)?;

            service.store().log_op(
                "restore",
                file,
                &format!(
                    "{} work entries, {} advances, {} expenses",
                    doc.work_entries.len(),
                    doc.advances.len(),
                    doc.expenses.len()
                ),
            );

            success(format!(
                "Backup restored: {} work entries, {} advances, {} expenses.",
                doc.work_entries.len(),
                doc.advances.len(),
                doc.expenses.len()
            ));
            Ok(())
        })?;
    }

    Ok(())
}

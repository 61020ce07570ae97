use std::path::Path;

use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::store::backup::write_backup_file;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = Path::new(file);
        ensure_writable(dest, false)?;

        with_service(cfg, |service| {
            let doc = service.export_document();
            let written = write_backup_file(&doc, dest, *compress)?;

            service.store().log_op(
                "backup",
                &written.to_string_lossy(),
                &format!(
                    "{} work entries, {} advances, {} expenses",
                    doc.work_entries.len(),
                    doc.advances.len(),
                    doc.expenses.len()
                ),
            );

            success(format!("Backup created: {}", written.display()));
            Ok(())
        })?;
    }

    Ok(())
}

use std::path::Path;

use crate::core::aggregate::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;

/// The full report (label, filtered entries, stats) as formatted JSON.
pub(crate) fn write_json(report: &PeriodReport, path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}

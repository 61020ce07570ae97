// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;
mod pdf;
mod text;

pub use model::ReportRow;
pub use text::build_share_message;

pub(crate) use fs_utils::ensure_writable;

use std::io;
use std::path::Path;

use clap::ValueEnum;

use crate::core::aggregate::PeriodReport;
use crate::errors::{AppError, AppResult};
use crate::models::UserSettings;
use crate::ui::messages::success;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    /// Plain-text share message (paste into a chat or SMS).
    Text,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Write a period report to `file` in the requested format.
pub fn export_report(
    report: &PeriodReport,
    settings: &UserSettings,
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::from(io::Error::other(format!(
            "Output file path must be absolute: {file}"
        ))));
    }

    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(report, settings, path)?,
        ExportFormat::Json => json::write_json(report, path)?,
        ExportFormat::Text => text::write_text(report, settings, path)?,
        ExportFormat::Pdf => pdf::write_pdf(report, settings, path)?,
    }

    Ok(())
}

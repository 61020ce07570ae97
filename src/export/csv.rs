use std::path::Path;

use csv::Writer;

use crate::core::aggregate::PeriodReport;
use crate::errors::AppResult;
use crate::export::model::{get_headers, rows_from_report};
use crate::export::notify_export_success;
use crate::models::UserSettings;

/// Entry rows followed by the period totals as trailing `total` records.
pub(crate) fn write_csv(
    report: &PeriodReport,
    settings: &UserSettings,
    path: &Path,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(std::io::Error::other)?;

    wtr.write_record(get_headers())
        .map_err(std::io::Error::other)?;

    for row in rows_from_report(report) {
        wtr.write_record(&[
            row.date,
            row.kind,
            row.status,
            format!("{:.2}", row.amount),
            format!("{:.2}", row.overtime),
            row.note,
        ])
        .map_err(std::io::Error::other)?;
    }

    let totals = [
        ("gross", report.stats.gross_total),
        ("advances", report.stats.total_advances),
        ("final", report.stats.final_total),
    ];
    for (name, value) in totals {
        wtr.write_record(&[
            String::new(),
            "total".to_string(),
            name.to_string(),
            format!("{:.2}", value),
            String::new(),
            settings.currency.clone(),
        ])
        .map_err(std::io::Error::other)?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

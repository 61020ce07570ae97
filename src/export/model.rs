// src/export/model.rs

use serde::Serialize;

use crate::core::aggregate::PeriodReport;
use crate::models::{DayStatus, WorkEntry};

/// Flat row shape shared by CSV and PDF exports. Work entries and
/// advances land in the same table, told apart by `kind`.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub date: String,
    pub kind: String,
    pub status: String,
    /// What the row contributes to the period total (advances negative-
    /// side, but stored unsigned here; the kind column disambiguates).
    pub amount: f64,
    pub overtime: f64,
    pub note: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "kind", "status", "amount", "overtime", "note"]
}

pub(crate) fn rows_from_report(report: &PeriodReport) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for entry in &report.work {
        match entry {
            WorkEntry::Day(day) => {
                let amount = match day.status {
                    DayStatus::Worked => day.rate,
                    DayStatus::HalfDay => day.rate / 2.0,
                    DayStatus::Missed | DayStatus::DayOff => 0.0,
                };
                rows.push(ReportRow {
                    date: day.date.to_string(),
                    kind: "day".to_string(),
                    status: day.status.as_str().to_string(),
                    amount,
                    overtime: day.overtime.unwrap_or(0.0),
                    note: day.note.clone().unwrap_or_default(),
                });
            }
            WorkEntry::Extra(extra) => {
                rows.push(ReportRow {
                    date: extra.date.to_string(),
                    kind: "extra".to_string(),
                    status: extra.title.clone().unwrap_or_default(),
                    amount: extra.price,
                    overtime: 0.0,
                    note: extra.note.clone().unwrap_or_default(),
                });
            }
        }
    }

    for advance in &report.advances {
        rows.push(ReportRow {
            date: advance.date.to_string(),
            kind: "advance".to_string(),
            status: String::new(),
            amount: advance.amount,
            overtime: 0.0,
            note: advance.note.clone().unwrap_or_default(),
        });
    }

    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}

pub(crate) fn row_to_cells(r: &ReportRow) -> Vec<String> {
    vec![
        r.date.clone(),
        r.kind.clone(),
        r.status.clone(),
        format!("{:.2}", r.amount),
        format!("{:.2}", r.overtime),
        r.note.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[ReportRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}

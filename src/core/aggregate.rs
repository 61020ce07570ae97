//! The reporting reducer: a pure function from entry collections and a
//! period predicate to a financial summary. No I/O, no clock.

use serde::Serialize;

use crate::core::period::Period;
use crate::models::{AdvanceEntry, DayStatus, PeriodStats, WorkEntry};

#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub label: String,
    pub work: Vec<WorkEntry>,
    pub advances: Vec<AdvanceEntry>,
    pub stats: PeriodStats,
}

/// Filter both collections by the period and fold the financial summary.
/// Empty inputs produce an all-zero stats object.
pub fn aggregate(
    work: &[WorkEntry],
    advances: &[AdvanceEntry],
    period: &Period,
) -> PeriodReport {
    let mut filtered_work: Vec<WorkEntry> = work
        .iter()
        .filter(|e| period.contains(e.date()))
        .cloned()
        .collect();
    filtered_work.sort_by_key(|e| e.date());

    let mut filtered_advances: Vec<AdvanceEntry> = advances
        .iter()
        .filter(|a| period.contains(a.date))
        .cloned()
        .collect();
    filtered_advances.sort_by_key(|a| a.date);

    let mut stats = PeriodStats::default();

    for entry in &filtered_work {
        match entry {
            WorkEntry::Day(day) => {
                match day.status {
                    DayStatus::Worked => {
                        stats.days_worked += 1.0;
                        stats.total_from_days += day.rate;
                    }
                    DayStatus::HalfDay => {
                        stats.days_worked += 0.5;
                        stats.total_from_days += day.rate / 2.0;
                    }
                    DayStatus::Missed => {
                        stats.days_missed += 1;
                    }
                    DayStatus::DayOff => {}
                }
                // overtime counts whatever the day's status is
                if let Some(overtime) = day.overtime {
                    stats.total_from_overtime += overtime;
                }
            }
            WorkEntry::Extra(extra) => {
                stats.total_from_extras += extra.price;
            }
        }
    }

    stats.gross_total =
        stats.total_from_days + stats.total_from_overtime + stats.total_from_extras;
    stats.total_advances = filtered_advances.iter().map(|a| a.amount).sum();
    // may go negative: the worker can owe money back
    stats.final_total = stats.gross_total - stats.total_advances;

    PeriodReport {
        label: period.label(),
        work: filtered_work,
        advances: filtered_advances,
        stats,
    }
}

use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::PeriodReport;
use crate::core::period::{Period, parse_period};
use crate::errors::{AppError, AppResult};
use crate::export::build_share_message;
use crate::models::{UserSettings, WorkEntry};
use crate::models::status::describe_status;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::money::format_amount;
use crate::utils::table::Table;

/// Resolve the reporting window from the CLI flags. Defaults to the
/// current calendar month when nothing is given.
pub(crate) fn resolve_window(
    month: &Option<String>,
    last: bool,
    range: &Option<String>,
    cycle: bool,
    settings: &UserSettings,
) -> AppResult<Period> {
    if cycle {
        return Ok(Period::cycle_from(settings));
    }
    if last {
        return Ok(Period::last_month());
    }
    if let Some(m) = month {
        let period = parse_period(m)?;
        return match period {
            Period::Month { .. } => Ok(period),
            _ => Err(AppError::InvalidPeriod(m.to_string())),
        };
    }
    if let Some(r) = range {
        let period = parse_period(r)?;
        return match period {
            Period::Custom { .. } => Ok(period),
            _ => Err(AppError::InvalidPeriod(r.to_string())),
        };
    }
    Ok(Period::current_month())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        month,
        last,
        range,
        cycle,
        details,
        share,
    } = cmd
    {
        with_service(cfg, |service| {
            let settings = service.settings();
            let period = resolve_window(month, *last, range, *cycle, &settings)?;
            let report = service.report(&period);

            if *share {
                print!("{}", build_share_message(&report, &settings));
                return Ok(());
            }

            print_report(&report, &settings, *details);
            Ok(())
        })?;
    }

    Ok(())
}

fn print_report(report: &PeriodReport, settings: &UserSettings, details: bool) {
    let c = &settings.currency;

    println!();
    header(format!("Report — {}", report.label));
    println!();

    stat_line("Days worked", &format!("{}", report.stats.days_worked));
    stat_line("Days missed", &format!("{}", report.stats.days_missed));
    stat_line(
        "Pay for days",
        &format_amount(report.stats.total_from_days, c),
    );
    stat_line(
        "Overtime",
        &format_amount(report.stats.total_from_overtime, c),
    );
    stat_line(
        "Extra services",
        &format_amount(report.stats.total_from_extras, c),
    );
    stat_line("Gross total", &format_amount(report.stats.gross_total, c));
    stat_line(
        "Advances taken",
        &format_amount(report.stats.total_advances, c),
    );

    let color = color_for_amount(report.stats.final_total);
    println!(
        "• Final total: {}{}{}",
        color,
        format_amount(report.stats.final_total, c),
        RESET
    );
    println!();

    if details {
        if report.work.is_empty() && report.advances.is_empty() {
            println!("No entries in this period.");
            return;
        }

        let mut table = Table::new(&["date", "entry", "amount", "note"]);
        for e in &report.work {
            table.add_row(detail_row(e, c));
        }
        for a in &report.advances {
            table.add_row(vec![
                a.date.to_string(),
                "Advance".to_string(),
                format_amount(a.amount, c),
                a.note.clone().unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());
        println!();
    }
}

// no escape codes inside the line: keeps the output grep-friendly
fn stat_line(label: &str, value: &str) {
    println!("• {label}: {value}");
}

fn detail_row(entry: &WorkEntry, currency: &str) -> Vec<String> {
    match entry {
        WorkEntry::Day(day) => {
            let mut name = describe_status(day.status).to_string();
            if let Some(overtime) = day.overtime {
                name.push_str(&format!(" (+{} overtime)", format_amount(overtime, currency)));
            }
            vec![
                day.date.to_string(),
                name,
                format_amount(day.rate, currency),
                day.note.clone().unwrap_or_default(),
            ]
        }
        WorkEntry::Extra(extra) => vec![
            extra.date.to_string(),
            format!("Extra: {}", extra.title.clone().unwrap_or_default()),
            format_amount(extra.price, currency),
            extra.note.clone().unwrap_or_default(),
        ],
    }
}

use crate::cli::commands::with_service;
use crate::cli::parser::{Commands, EntryKind};
use crate::config::Config;
use crate::core::period::{Period, parse_period};
use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::models::status::describe_status;
use crate::ui::messages::info;
use crate::utils::money::format_amount;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, period } = cmd {
        let window: Option<Period> = match period {
            Some(p) => Some(parse_period(p)?),
            None => None,
        };
        let keep = |d: chrono::NaiveDate| window.as_ref().is_none_or(|w| w.contains(d));

        with_service(cfg, |service| {
            let currency = service.settings().currency;

            match kind {
                EntryKind::Work => {
                    let entries: Vec<WorkEntry> = service
                        .work_log()
                        .entries()
                        .into_iter()
                        .filter(|e| keep(e.date()))
                        .collect();

                    if entries.is_empty() {
                        info("No work entries found.");
                        return Ok(());
                    }

                    let mut table =
                        Table::new(&["date", "entry", "amount", "overtime", "note", "id"]);
                    for e in &entries {
                        table.add_row(work_row(e, &currency));
                    }
                    print!("{}", table.render());
                }
                EntryKind::Advance => {
                    let list: Vec<_> = service
                        .advances()
                        .into_iter()
                        .filter(|a| keep(a.date))
                        .collect();

                    if list.is_empty() {
                        info("No advances found.");
                        return Ok(());
                    }

                    let mut table = Table::new(&["date", "amount", "note", "id"]);
                    for a in &list {
                        table.add_row(vec![
                            a.date.to_string(),
                            format_amount(a.amount, &currency),
                            a.note.clone().unwrap_or_default(),
                            a.id.clone(),
                        ]);
                    }
                    print!("{}", table.render());
                }
                EntryKind::Expense => {
                    let list: Vec<_> = service
                        .expenses()
                        .into_iter()
                        .filter(|e| keep(e.date))
                        .collect();

                    if list.is_empty() {
                        info("No expenses found.");
                        return Ok(());
                    }

                    let mut table = Table::new(&["date", "amount", "note", "id"]);
                    for e in &list {
                        table.add_row(vec![
                            e.date.to_string(),
                            format_amount(e.amount, &currency),
                            e.note.clone().unwrap_or_default(),
                            e.id.clone(),
                        ]);
                    }
                    print!("{}", table.render());
                }
            }

            Ok(())
        })?;
    }

    Ok(())
}

// plain labels only: escape codes would skew the column widths
fn work_row(entry: &WorkEntry, currency: &str) -> Vec<String> {
    match entry {
        WorkEntry::Day(day) => {
            let label = describe_status(day.status);
            vec![
                day.date.to_string(),
                label.to_string(),
                format_amount(day.rate, currency),
                day.overtime
                    .map(|o| format_amount(o, currency))
                    .unwrap_or_else(|| "--".to_string()),
                day.note.clone().unwrap_or_default(),
                day.date.to_string(),
            ]
        }
        WorkEntry::Extra(extra) => vec![
            extra.date.to_string(),
            format!("Extra: {}", extra.title.clone().unwrap_or_default()),
            format_amount(extra.price, currency),
            "--".to_string(),
            extra.note.clone().unwrap_or_default(),
            extra.id.clone(),
        ],
    }
}

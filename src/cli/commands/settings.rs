use crate::cli::commands::with_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sync::SyncOutcome;
use crate::ui::messages::{note, success};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::money::{format_amount, parse_amount};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print_settings,
        rate,
        worker,
        employer,
        currency,
        theme,
        notify,
        notify_time,
    } = cmd
    {
        let has_changes = rate.is_some()
            || worker.is_some()
            || employer.is_some()
            || currency.is_some()
            || theme.is_some()
            || notify.is_some()
            || notify_time.is_some();

        with_service(cfg, |service| {
            let mut settings = service.settings();

            if has_changes {
                if let Some(r) = rate {
                    settings.daily_rate = parse_amount(r)?;
                }
                if let Some(w) = worker {
                    settings.worker_name = w.clone();
                }
                if let Some(e) = employer {
                    settings.employer_name = e.clone();
                }
                if let Some(c) = currency {
                    settings.currency = c.clone();
                }
                if let Some(t) = theme {
                    settings.theme = *t;
                }
                if let Some(n) = notify {
                    settings.notification_enabled = *n;
                }
                if let Some(t) = notify_time {
                    // stored as "HH:MM"; validate before accepting
                    chrono::NaiveTime::parse_from_str(t, "%H:%M")
                        .map_err(|_| AppError::InvalidTime(t.clone()))?;
                    settings.notification_time = t.clone();
                }

                let outcome = service.save_settings(&settings)?;
                success("Settings updated.");
                if outcome == SyncOutcome::DeferredLocalOnly {
                    note("Saved locally; remote sync deferred.");
                }
            }

            if *print_settings || !has_changes {
                println!();
                line("Daily rate", &format_amount(settings.daily_rate, &settings.currency));
                line("Worker", &settings.worker_name);
                line("Employer", &settings.employer_name);
                line("Currency", &settings.currency);
                line("Theme", settings.theme.as_str());
                line(
                    "Reminder",
                    &if settings.notification_enabled {
                        format!("enabled at {}", settings.notification_time)
                    } else {
                        "disabled".to_string()
                    },
                );
                line(
                    "Billing cycle start",
                    &settings
                        .billing_cycle_start
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                );
                println!();
            }

            Ok(())
        })?;
    }

    Ok(())
}

fn line(label: &str, value: &str) {
    println!("{CYAN}• {label}:{RESET} {value}");
}

use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Store, migrate};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate: run_migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let store = Store::open(&cfg.database)?;

        if *run_migrate {
            // Store::open already applied pending migrations
            let version = migrate::current_version(&store.conn)?;
            success(format!("Database schema up to date (version {})", version));
        }

        if *check {
            let result: String =
                store
                    .conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                warning(format!("Integrity check reported: {}", result));
            }
        }

        if *vacuum {
            store.conn.execute("VACUUM", [])?;
            success("Database optimized (VACUUM).");
        }

        if *info {
            print_db_info(&store, &cfg.database)?;
        }
    }

    Ok(())
}

fn print_db_info(store: &Store, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let log = store.work_log();
    println!(
        "{}• Work entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        log.len(),
        RESET
    );
    println!(
        "{}• Advances:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.advances().len(),
        RESET
    );
    println!(
        "{}• Expenses:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.expenses().len(),
        RESET
    );

    let owner = store
        .account_owner()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Account owner:{} {}", CYAN, RESET, owner);

    let version = migrate::current_version(&store.conn)?;
    println!("{}• Schema version:{} {}", CYAN, RESET, version);

    println!();
    Ok(())
}

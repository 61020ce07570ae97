use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Store, oplog};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let store = Store::open(&cfg.database)?;
        let rows = oplog::load(&store.conn)?;

        if rows.is_empty() {
            info("Operation log is empty.");
            return Ok(());
        }

        for row in rows {
            println!("{} [{}] {} — {}", row.date, row.operation, row.target, row.message);
        }
    }

    Ok(())
}

//! Internal operation log (init, sync, backup, restore, ...).

use chrono::Local;
use rusqlite::{Connection, params};

use crate::errors::AppResult;

#[derive(Debug, Clone)]
pub struct OplogRow {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write one log line into the `oplog` table.
pub fn append(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO oplog (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Newest rows first.
pub fn load(conn: &Connection) -> AppResult<Vec<OplogRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, target, message FROM oplog ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(OplogRow {
            date: row.get(0)?,
            operation: row.get(1)?,
            target: row.get(2)?,
            message: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

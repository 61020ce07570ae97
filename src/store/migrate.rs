//! Schema migration engine. All table creation and upgrades go through
//! here; `Store::open` never issues CREATE TABLE directly.

use rusqlite::{Connection, OptionalExtension};

use crate::errors::{AppError, AppResult};

const LATEST_VERSION: i32 = 1;

fn ensure_version_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);",
    )
}

pub fn current_version(conn: &Connection) -> rusqlite::Result<i32> {
    ensure_version_table(conn)?;
    let v: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or(0))
}

fn set_version(conn: &Connection, version: i32) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Apply every migration newer than the stored version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = current_version(conn)?;

    while version < LATEST_VERSION {
        match version {
            0 => migrate_to_v1(conn)?,
            v => {
                return Err(AppError::Migration(format!(
                    "no migration registered from version {}",
                    v
                )));
            }
        }
        version += 1;
        set_version(conn, version)?;
    }

    Ok(())
}

/// v1: key/value payload table + operation log.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

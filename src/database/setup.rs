use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;

/// Bumped whenever `schema.sql` changes shape
const SCHEMA_VERSION: i32 = 1;

/// Creates the `kv_store` table on a fresh database; existing data is left alone
pub fn initialize_database(conn: &Connection) -> Result<()> {
    let version = schema_version(conn)?;
    if version >= SCHEMA_VERSION {
        debug!("Database schema at version {}", version);
        return Ok(());
    }

    conn.execute_batch(include_str!("schema.sql"))
        .context("Failed to create database schema")?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)
        .context("Failed to record schema version")?;

    info!("Database schema created (version {})", SCHEMA_VERSION);
    Ok(())
}

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .context("Failed to read schema version")
}

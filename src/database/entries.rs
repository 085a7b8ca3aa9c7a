use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::models::StoredEntry;

pub fn upsert_entry(conn: &Connection, key: &str, value: &str) -> Result<StoredEntry> {
    let sql = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at RETURNING key, value, updated_at";
    let updated_at = Utc::now().naive_utc();

    conn.query_row(sql, params![key, value, updated_at], parse_entry_row)
        .with_context(|| format!("Failed to store value for key: {}", key))
}

pub fn find_by_key(conn: &Connection, key: &str) -> Result<Option<StoredEntry>> {
    let sql = "SELECT key, value, updated_at FROM kv_store WHERE key = ?1";

    conn.query_row(sql, params![key], parse_entry_row)
        .optional()
        .with_context(|| format!("Failed to query value for key: {}", key))
}

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<StoredEntry> {
    Ok(StoredEntry {
        key: row.get(0)?,
        value: row.get(1)?,
        updated_at: row.get(2)?,
    })
}

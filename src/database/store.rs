use anyhow::{Context, Result};
use log::debug;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;

use super::{entries, setup};
use crate::storage::KeyValueStore;

type DbPool = r2d2::Pool<SqliteConnectionManager>;
type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Key-value store backed by a single SQLite table
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists
    pub fn open(database_path: &Path) -> Result<Self> {
        let manager = SqliteConnectionManager::file(database_path)
            .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));
        let pool = r2d2::Pool::builder()
            .max_size(2)
            .build(manager)
            .with_context(|| format!("Failed to open database {}", database_path.display()))?;

        let store = Self { pool };
        let conn = store.connection()?;
        setup::initialize_database(&conn)?;
        Ok(store)
    }

    fn connection(&self) -> Result<DbConn> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}

impl KeyValueStore for SqliteStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let conn = self.connection()?;
        let entry = entries::find_by_key(&conn, key)?;
        Ok(entry.map(|e| e.value))
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.connection()?;
        let entry = entries::upsert_entry(&conn, key, value)?;
        debug!("Stored {} at {}", entry.key, entry.updated_at);
        Ok(())
    }

    fn save_batch(&self, values: &[(&str, String)]) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction().context("Failed to start transaction")?;

        for (key, value) in values {
            let entry = entries::upsert_entry(&tx, key, value)?;
            debug!("Stored {} at {}", entry.key, entry.updated_at);
        }

        tx.commit().context("Failed to commit transaction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_overwrites_value() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&dir.path().join("league.db")).unwrap();

        store.save_raw("gameMode", "\"1v1\"").unwrap();
        store.save_raw("gameMode", "\"2v2\"").unwrap();

        assert_eq!(store.load_raw("gameMode").unwrap().as_deref(), Some("\"2v2\""));
        assert_eq!(store.load_raw("players").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .save_batch(&[("players", "[\"Eli\"]".to_string()), ("results", "[]".to_string())])
                .unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.load_raw("players").unwrap().as_deref(), Some("[\"Eli\"]"));
        assert_eq!(reopened.load_raw("results").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_batch_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(&dir.path().join("league.db")).unwrap();
        store.save_raw("players", "[\"Eli\"]").unwrap();

        let conn = store.connection().unwrap();
        conn.execute_batch(
            "CREATE TRIGGER reject_results BEFORE INSERT ON kv_store WHEN NEW.key = 'results'
             BEGIN SELECT RAISE(ABORT, 'results rejected'); END;",
        )
        .unwrap();
        drop(conn);

        let batch = [
            ("players", "[\"Eliya\"]".to_string()),
            ("results", "[]".to_string()),
        ];
        assert!(store.save_batch(&batch).is_err());

        assert_eq!(store.load_raw("players").unwrap().as_deref(), Some("[\"Eli\"]"));
        assert_eq!(store.load_raw("results").unwrap(), None);
    }
}

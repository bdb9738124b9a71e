use rusqlite::{Connection, params, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;
use chrono::Utc;

use crate::error::{Result, MedPredictError};
use crate::store::StorageBackend;

/// SQLite-backed key-value storage
///
/// Schema:
/// ```sql
/// CREATE TABLE kv_store (
///     key TEXT PRIMARY KEY,
///     value TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```
pub struct SqliteBackend {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBackend {
    /// Open (or create) the database; `":memory:"` keeps it in RAM
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .map_err(MedPredictError::Database)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        tracing::debug!("Opened SQLite store at {}", db_path);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| MedPredictError::Store(format!("SQLite connection poisoned: {}", e)))
    }

    /// Keys currently stored, sorted
    pub async fn keys(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(keys)
    }
}

#[async_trait]
impl StorageBackend for SqliteBackend {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?", params![key])?;
        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}

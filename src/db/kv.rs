//! Key-value persistence behind the ledger.
//!
//! The ledger never touches storage directly: it reads a whole blob on
//! load and overwrites it on every mutation through this trait.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub const RECORDS_KEY: &str = "driver-records";
pub const SETTINGS_KEY: &str = "driver-settings";

pub trait KvStore {
    fn load(&self, key: &str) -> AppResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Volatile store: tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the `kv` table of the SQLite data file.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::new(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KvStore for SqliteKv {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

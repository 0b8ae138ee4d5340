//! Key/value store backed by the `kv` table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::persistence::KeyValueStore;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::new(path)?))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    // A single statement: the previous value is replaced atomically or not at all.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Local::now().to_rfc3339()],
            )?;
            Ok(())
        })
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
            Ok(())
        })
    }
}

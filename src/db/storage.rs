//! Key-value slots that survive the process.

use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;

use crate::error::Result;

/// A set of named text slots. Writing a key replaces its whole value.
pub trait DurableStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Slots kept in process memory. Useful for tests and for callers that
/// persist the ledger some other way.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Slots stored as rows of the `ledger_slots` table.
///
/// The connection must have been set up by
/// [establish_connection](crate::db::connection::establish_connection).
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl DurableStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM ledger_slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO ledger_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::{establish_connection, establish_test_connection};
    use tempfile::TempDir;

    #[test]
    fn test_memory_read_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("transactions").unwrap(), None);
    }

    #[test]
    fn test_memory_write_replaces_value() {
        let mut storage = MemoryStorage::new();
        storage.write("transactions", "[]").unwrap();
        storage.write("transactions", "[1]").unwrap();

        assert_eq!(storage.read("transactions").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_sqlite_read_absent_key() {
        let storage = SqliteStorage::new(establish_test_connection().unwrap());
        assert_eq!(storage.read("transactions").unwrap(), None);
    }

    #[test]
    fn test_sqlite_write_replaces_value() {
        let mut storage = SqliteStorage::new(establish_test_connection().unwrap());
        storage.write("transactions", "first").unwrap();
        storage.write("transactions", "second").unwrap();
        storage.write("other", "untouched").unwrap();

        assert_eq!(storage.read("transactions").unwrap().as_deref(), Some("second"));
        assert_eq!(storage.read("other").unwrap().as_deref(), Some("untouched"));

        let conn = storage.into_connection();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM ledger_slots", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 2);
    }

    #[test]
    fn test_sqlite_value_survives_reopen() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("ledger.db");

        let mut storage = SqliteStorage::new(establish_connection(&path).unwrap());
        storage.write("transactions", "kept").unwrap();
        drop(storage);

        let reopened = SqliteStorage::new(establish_connection(&path).unwrap());
        assert_eq!(reopened.read("transactions").unwrap().as_deref(), Some("kept"));
    }
}

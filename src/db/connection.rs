use rusqlite::{Connection, Result};
use std::path::Path;

const CREATE_SLOTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS ledger_slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

pub fn establish_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute(CREATE_SLOTS_TABLE, [])?;
    Ok(conn)
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute(CREATE_SLOTS_TABLE, [])?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_establish_connection_creates_file_and_table() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("ledger.db");

        let conn = establish_connection(&path).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'ledger_slots'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 1);
        assert!(path.exists());
    }

    #[test]
    fn test_establish_connection_twice_is_ok() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("ledger.db");

        establish_connection(&path).unwrap();
        assert!(establish_connection(&path).is_ok());
    }
}

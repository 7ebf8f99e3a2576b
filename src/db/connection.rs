//! SQLite connection management for carved stores.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Open a read-only connection to a carved store.
pub fn open_store(path: &Path) -> rusqlite::Result<Connection> {
    debug!(?path, "Opening carved store");
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let conn = open_store(&path).unwrap();
        assert!(conn.execute("INSERT INTO t VALUES (1)", []).is_err());
    }

    #[test]
    fn test_open_missing_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_store(&dir.path().join("missing.db")).is_err());
    }
}

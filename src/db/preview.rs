//! Reads the canvas preview image out of a carved store.
//!
//! Both queries scan every row and keep only the last one, so a store with
//! several preview rows yields the image from the final row.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use super::{connection, queries};
use crate::container::CarvedStore;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use tracing::debug;

/// Open `store` and read its preview image.
pub fn read_preview_image(store: &CarvedStore) -> rusqlite::Result<Vec<u8>> {
    let conn = connection::open_store(store.path())?;
    read_image_data(&conn)
}

/// Read the preview image through an already open connection.
///
/// Returns an empty buffer when `CanvasPreview` has no rows.
pub fn read_image_data(conn: &Connection) -> rusqlite::Result<Vec<u8>> {
    let length = read_image_length(conn)?;

    let mut stmt = conn.prepare(queries::IMAGE_DATA)?;
    let mut rows = stmt.query([])?;
    let mut buffer = Vec::new();
    let mut scanned = 0usize;

    while let Some(row) = rows.next()? {
        scanned += 1;
        buffer = vec![0u8; length];
        let bytes: &[u8] = match row.get_ref(0)? {
            ValueRef::Blob(b) | ValueRef::Text(b) => b,
            _ => &[],
        };
        let n = bytes.len().min(length);
        buffer[..n].copy_from_slice(&bytes[..n]);
    }

    debug!(scanned, length, "Read canvas preview rows");
    Ok(buffer)
}

/// Length of the preview blob in the last scanned row; 0 if there are none.
fn read_image_length(conn: &Connection) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare(queries::IMAGE_DATA_LENGTH)?;
    let mut rows = stmt.query([])?;
    let mut length = 0i64;

    while let Some(row) = rows.next()? {
        length = row.get::<_, Option<i64>>(0)?.unwrap_or(0);
    }

    Ok(usize::try_from(length).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::carve_embedded_store_in;
    use crate::test_support::{container_bytes, preview_store, wal_preview_store};
    use std::io::Cursor;

    #[test]
    fn test_reads_single_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        let image = b"\x89PNG\r\n\x1a\n fake image".to_vec();
        preview_store(&path, &[image.as_slice()]);

        let conn = connection::open_store(&path).unwrap();
        assert_eq!(read_image_data(&conn).unwrap(), image);
    }

    #[test]
    fn test_last_row_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        preview_store(&path, &[&b"first"[..], &b"second row"[..]]);

        let conn = connection::open_store(&path).unwrap();
        assert_eq!(read_image_data(&conn).unwrap(), b"second row");
    }

    #[test]
    fn test_empty_table_gives_empty_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        preview_store(&path, &[]);

        let conn = connection::open_store(&path).unwrap();
        assert!(read_image_data(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_null_image_data() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE CanvasPreview (ImageData BLOB);
             INSERT INTO CanvasPreview VALUES (NULL);",
        )
        .unwrap();
        assert!(read_image_data(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_missing_table_is_storage_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE Other (x INTEGER);").unwrap();
        assert!(read_image_data(&conn).is_err());
    }

    #[test]
    fn test_wal_store_leaves_no_files_behind() {
        let scratch = tempfile::tempdir().unwrap();
        let source = scratch.path().join("source.db");
        wal_preview_store(&source, &[&b"wal image"[..]]);
        let data = container_bytes(&std::fs::read(&source).unwrap());

        let parent = tempfile::tempdir().unwrap();
        let store = carve_embedded_store_in(&mut Cursor::new(&data), parent.path()).unwrap();
        assert_eq!(read_preview_image(&store).unwrap(), b"wal image");

        drop(store);
        let left: Vec<_> = std::fs::read_dir(parent.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert!(left.is_empty(), "left behind: {:?}", left);
    }
}

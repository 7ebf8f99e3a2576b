//! Builders for synthetic containers used across the unit tests.

use rusqlite::{params, Connection};
use std::path::Path;

/// Offset field value used by [`container_bytes`]; the store lands at 0x110.
pub const STORED_OFFSET: u32 = 0x100;

/// Create a SQLite store with one `CanvasPreview` row per image.
pub fn preview_store(path: &Path, images: &[&[u8]]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch("CREATE TABLE CanvasPreview (Id INTEGER PRIMARY KEY, ImageData BLOB);")
        .unwrap();
    for image in images {
        conn.execute("INSERT INTO CanvasPreview (ImageData) VALUES (?1)", params![image])
            .unwrap();
    }
}

/// Same as [`preview_store`], with the database switched to WAL journaling.
pub fn wal_preview_store(path: &Path, images: &[&[u8]]) {
    preview_store(path, images);
    let conn = Connection::open(path).unwrap();
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "wal");
}

/// Wrap a store file in a container header pointing at it.
pub fn container_bytes(store: &[u8]) -> Vec<u8> {
    let start = STORED_OFFSET as usize + 0x10;
    let mut data: Vec<u8> = (0..start).map(|i| (i % 251) as u8).collect();
    data[0x34..0x38].copy_from_slice(&STORED_OFFSET.to_be_bytes());
    data.extend_from_slice(store);
    data
}

/// Write a container holding a single preview image to `path`.
pub fn write_container(path: &Path, image: &[u8]) {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("store.db");
    preview_store(&store_path, &[image]);
    let store = std::fs::read(&store_path).unwrap();
    std::fs::write(path, container_bytes(&store)).unwrap();
}

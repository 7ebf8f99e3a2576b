//! Fixed layout of the clipboard container format.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial constants

/// Byte position of the big-endian offset field in the container header.
pub const OFFSET_FIELD_POS: u64 = 0x34;

/// Width of the offset field.
pub const OFFSET_FIELD_LEN: u64 = 4;

/// Added to the stored offset to reach the first byte of the embedded store.
pub const RELATIVE_STORE_OFFSET: u64 = 0x10;

/// Size of the fixed SQLite file header; a carved store shorter than this
/// cannot be a database.
pub const SQLITE_HEADER_LEN: u64 = 100;

/// Magic string every SQLite 3 database file starts with.
pub const SQLITE_MAGIC: &[u8; 16] = b"SQLite format 3\0";

/// Extension given to images written in batch mode.
pub const OUTPUT_EXTENSION: &str = "png";


//! Locates and carves the SQLite store embedded in a clipboard container.
//!
//! The container header holds a big-endian `u32` at [`OFFSET_FIELD_POS`].
//! The embedded database starts [`RELATIVE_STORE_OFFSET`] bytes after the
//! offset it names and runs to the end of the file.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::config::{
    OFFSET_FIELD_LEN, OFFSET_FIELD_POS, RELATIVE_STORE_OFFSET, SQLITE_HEADER_LEN, SQLITE_MAGIC,
};
use crate::error::ContainerError;
use byteorder::{BigEndian, ReadBytesExt};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// File name of the carved database inside its scratch directory.
const STORE_FILE_NAME: &str = "store.db";

/// Embedded store copied out of a container.
///
/// The database lives in its own scratch directory, so anything SQLite puts
/// beside it (`-wal`, `-shm`, `-journal`) goes away with it when this value
/// is dropped.
#[derive(Debug)]
pub struct CarvedStore {
    dir: TempDir,
    path: PathBuf,
    start_offset: u64,
    len: u64,
}

impl CarvedStore {
    /// Path of the temporary database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scratch directory holding the database and its sidecar files.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Position in the container the store was carved from.
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Number of bytes copied into the store.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// True when nothing was copied; never the case for a located store.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Total length of a seekable stream, leaving the cursor at the start.
fn stream_len<R: Seek>(input: &mut R) -> io::Result<u64> {
    let len = input.seek(SeekFrom::End(0))?;
    input.seek(SeekFrom::Start(0))?;
    Ok(len)
}

/// Find where the embedded store begins.
///
/// Fails if the header is too short to hold the offset field or if the
/// computed start leaves no room for a SQLite header before end of file.
pub fn locate_embedded_store<R: Read + Seek>(input: &mut R) -> Result<u64, ContainerError> {
    let len = stream_len(input)?;
    if len < OFFSET_FIELD_POS + OFFSET_FIELD_LEN {
        return Err(ContainerError::HeaderTruncated { len });
    }

    input.seek(SeekFrom::Start(OFFSET_FIELD_POS))?;
    let stored_offset = input.read_u32::<BigEndian>()?;
    let start = u64::from(stored_offset) + RELATIVE_STORE_OFFSET;
    debug!(stored_offset, start, len, "Read container offset field");

    match start.checked_add(SQLITE_HEADER_LEN) {
        Some(end) if end <= len => Ok(start),
        _ => Err(ContainerError::OffsetOutOfBounds { start, len }),
    }
}

/// Copy the embedded store into a fresh scratch directory under the system
/// temp dir.
pub fn carve_embedded_store<R: Read + Seek>(input: &mut R) -> Result<CarvedStore, ContainerError> {
    carve_embedded_store_in(input, &std::env::temp_dir())
}

/// Copy the embedded store into a fresh scratch directory under `parent`.
pub fn carve_embedded_store_in<R: Read + Seek>(
    input: &mut R,
    parent: &Path,
) -> Result<CarvedStore, ContainerError> {
    let start_offset = locate_embedded_store(input)?;

    let dir = tempfile::Builder::new()
        .prefix("clipconverter")
        .tempdir_in(parent)?;
    let path = dir.path().join(STORE_FILE_NAME);

    let mut file = File::create(&path)?;
    input.seek(SeekFrom::Start(start_offset))?;
    let len = io::copy(input, &mut file)?;
    file.flush()?;
    drop(file);

    let mut magic = [0u8; 16];
    File::open(&path)?.read_exact(&mut magic)?;
    if &magic != SQLITE_MAGIC {
        warn!(start_offset, "Carved store does not start with the SQLite magic string");
    }

    debug!(start_offset, len, ?path, "Carved embedded store");
    Ok(CarvedStore {
        dir,
        path,
        start_offset,
        len,
    })
}

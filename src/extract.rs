//! Extraction pipeline: container in, preview image out.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::container;
use crate::db::preview;
use crate::error::ExtractError;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::info;

/// Outcome of one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Where the embedded store started in the container.
    pub store_offset: u64,
    /// Number of image bytes written.
    pub image_len: usize,
}

/// Extract the canvas preview of `input` into `output`.
///
/// `output` is created or truncated. It is only opened once the image has
/// been read, but a failed write leaves it in whatever state it reached.
pub fn extract(input: &Path, output: &Path) -> Result<ExtractSummary, ExtractError> {
    let mut reader = BufReader::new(File::open(input)?);
    let store = container::carve_embedded_store(&mut reader)?;
    drop(reader);

    let image = preview::read_preview_image(&store)?;

    let mut out = File::create(output)?;
    out.write_all(&image)?;
    out.flush()?;

    let summary = ExtractSummary {
        store_offset: store.start_offset(),
        image_len: image.len(),
    };
    info!(
        ?input,
        ?output,
        store_offset = summary.store_offset,
        bytes = summary.image_len,
        "Extracted preview"
    );
    Ok(summary)
}

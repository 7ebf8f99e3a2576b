//! SQL queries against the embedded preview store.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial query constants

/// Byte length of the preview blob.
pub const IMAGE_DATA_LENGTH: &str = "SELECT length(ImageData) FROM CanvasPreview";

/// The preview blob itself.
pub const IMAGE_DATA: &str = "SELECT ImageData FROM CanvasPreview";

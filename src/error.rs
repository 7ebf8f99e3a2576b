//! Error types for container parsing, extraction and the command line.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial error enums

use std::path::PathBuf;
use thiserror::Error;

/// Errors while locating or carving the embedded store.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The input ends before the offset field.
    #[error("SQLite header not found: container is only {len} bytes long")]
    HeaderTruncated { len: u64 },

    /// The stored offset points past the end of the input.
    #[error("SQLite header not found: store would start at byte {start} of a {len} byte container")]
    OffsetOutOfBounds { start: u64, len: u64 },
}

/// Errors from a single extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] ContainerError),

    #[error("Failed to read canvas preview: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Command line errors, each mapped to its own exit code.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Too few arguments")]
    TooFewArguments,

    #[error("Too many arguments")]
    TooManyArguments,

    #[error("Cannot open input file")]
    InputNotFound(PathBuf),

    #[error("Input directory does not exist")]
    InputDirNotFound(PathBuf),

    #[error("Output directory is a file")]
    OutputConflict(PathBuf),

    #[error("Specified multiple commands")]
    MultipleCommands,

    #[error("Invalid input pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
}

impl UsageError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            UsageError::TooFewArguments | UsageError::InvalidPattern(_) => 2,
            UsageError::TooManyArguments => 3,
            UsageError::InputNotFound(_) => 4,
            UsageError::InputDirNotFound(_) => 5,
            UsageError::OutputConflict(_) => 6,
            UsageError::MultipleCommands => 7,
        }
    }
}

/// Exit code for errors that are not usage errors.
pub const FATAL_EXIT_CODE: u8 = 1;

/// Pick the exit code for an error returned by a command.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<UsageError>()
        .map(UsageError::exit_code)
        .unwrap_or(FATAL_EXIT_CODE)
}

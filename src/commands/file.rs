//! `/F`: extract the preview of a single container.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::error::UsageError;
use crate::extract;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Run `/F <input> <output>`.
pub fn run(params: &[String]) -> Result<()> {
    let (input, output) = match params {
        [input, output] => (Path::new(input), Path::new(output)),
        [] | [_] => return Err(UsageError::TooFewArguments.into()),
        _ => return Err(UsageError::TooManyArguments.into()),
    };

    if !input.is_file() || File::open(input).is_err() {
        return Err(UsageError::InputNotFound(input.to_path_buf()).into());
    }

    extract::extract(input, output)
        .with_context(|| format!("Failed to extract {}", input.display()))?;
    Ok(())
}

//! `/M`: extract every matching container in a directory.
//!
//! Files are processed one at a time in name order. The first failed
//! extraction aborts the whole batch.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::config::OUTPUT_EXTENSION;
use crate::error::UsageError;
use crate::extract;
use anyhow::{Context, Result};
use glob::Pattern;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Regular files directly inside `dir` whose names match `pattern`, sorted.
pub fn matching_files(dir: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for `input`: its file stem with the image extension, in `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}

/// Run `/M <input dir> <pattern> <output dir>`.
pub fn run(params: &[String], out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let (input_dir, pattern, output_dir) = match params {
        [dir, pattern, output] => (Path::new(dir), pattern.as_str(), Path::new(output)),
        [] | [_] | [_, _] => return Err(UsageError::TooFewArguments.into()),
        _ => return Err(UsageError::TooManyArguments.into()),
    };

    if !input_dir.is_dir() {
        return Err(UsageError::InputDirNotFound(input_dir.to_path_buf()).into());
    }
    if output_dir.is_file() {
        return Err(UsageError::OutputConflict(output_dir.to_path_buf()).into());
    }
    let pattern = Pattern::new(pattern).map_err(UsageError::from)?;

    if !output_dir.is_dir() {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    }

    let files = matching_files(input_dir, &pattern)?;
    debug!(count = files.len(), %pattern, "Matched input files");

    if files.is_empty() {
        writeln!(err, "Warning: No input files found")?;
        return Ok(());
    }

    for file in &files {
        writeln!(out, "{}", file.display())?;
        let target = output_path(file, output_dir);
        extract::extract(file, &target)
            .with_context(|| format!("Failed to extract {}", file.display()))?;
    }
    Ok(())
}

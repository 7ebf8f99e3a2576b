//! clipconverter - extract canvas preview images from clipboard containers
//!
//! Reads the SQLite store embedded in each container and writes its
//! `CanvasPreview.ImageData` blob out as an image file.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial CLI

use clipconverter::{commands, error};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match commands::run(&args, &mut out, &mut err) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            let _ = writeln!(err, "Error: {:#}", e);
            ExitCode::from(error::exit_code_for(&e))
        }
    }
}

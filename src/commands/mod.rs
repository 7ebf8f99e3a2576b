//! Command implementations and dispatch.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial module structure

pub mod batch;
pub mod file;
pub mod help;

use crate::cli::{self, Command};
use anyhow::Result;
use std::io::Write;

/// Parse `args` (without the program name) and run the selected command.
///
/// Regular output goes to `out`, warnings to `err`. Errors are returned for
/// the caller to report and map to an exit code.
pub fn run<S: AsRef<str>>(args: &[S], out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let invocation = cli::parse_args(args)?;

    for switch in &invocation.unknown_switches {
        writeln!(err, "Warning: Unknown command line switch: {}", switch)?;
    }

    match invocation.command {
        Some(Command::Extract) => file::run(&invocation.params),
        Some(Command::BatchExtract) => batch::run(&invocation.params, out, err),
        Some(Command::Help) => Ok(help::run(out)?),
        None => {
            writeln!(out, "Invalid option: {}", invocation.first_switch().unwrap_or_default())?;
            writeln!(out, "Enter clipconverter /? to view the available options")?;
            Ok(())
        }
    }
}

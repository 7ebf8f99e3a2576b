//! Usage text and version banner.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use std::io::{self, Write};

const USAGE: &[&str] = &[
    "clipconverter /F [Input file] [Output file]",
    "clipconverter /M [Input folder] [Input pattern] [Output folder]",
    "clipconverter [/?|/H|/HELP]",
];

/// Print the banner and usage lines.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "ClipConverter {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Copyright (C) {}", env!("CARGO_PKG_AUTHORS"))?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    for line in USAGE {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(&format!("ClipConverter {}", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("Copyright (C) ClipConverter contributors\n"));
        assert!(text.contains("clipconverter /F"));
        assert!(text.contains("clipconverter /M"));
        assert!(text.contains("/?|/H|/HELP"));
    }
}

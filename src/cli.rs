//! Command line switch parsing.
//!
//! Switches start with `/` or `-`, are case-insensitive and must come before
//! positional parameters. Exactly one command switch selects what to run.
//!
//! CHANGELOG:
//! - 10/18/2026 - Initial implementation

use crate::error::UsageError;

/// Command selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/F <input> <output>`
    Extract,
    /// `/M <input dir> <pattern> <output dir>`
    BatchExtract,
    /// `/?`, `/H`, `/HELP`
    Help,
}

impl Command {
    /// Match a switch (without prefix, upper-cased) to a command.
    ///
    /// Exact names win. Failing that, a switch beginning with one of the
    /// single-letter extract commands selects it (`FA` is `F`).
    fn from_switch(switch: &str) -> Option<Self> {
        match switch {
            "F" => Some(Command::Extract),
            "M" => Some(Command::BatchExtract),
            "?" | "H" | "HELP" => Some(Command::Help),
            s if s.starts_with('F') => Some(Command::Extract),
            s if s.starts_with('M') => Some(Command::BatchExtract),
            _ => None,
        }
    }
}

/// Result of parsing the raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The command to run, if any switch named one.
    pub command: Option<Command>,
    /// Switches that matched no command, upper-cased and without prefix.
    pub unknown_switches: Vec<String>,
    /// All switches in the order given, upper-cased and without prefix.
    pub switches: Vec<String>,
    /// Positional parameters following the switches.
    pub params: Vec<String>,
}

impl Invocation {
    /// The first switch given, used when reporting an invalid option.
    pub fn first_switch(&self) -> Option<&str> {
        self.switches.first().map(String::as_str)
    }
}

fn strip_switch_prefix(arg: &str) -> Option<&str> {
    arg.strip_prefix('/').or_else(|| arg.strip_prefix('-'))
}

/// Parse arguments (without the program name).
///
/// Fails with [`UsageError::TooFewArguments`] when no switch is given and
/// with [`UsageError::MultipleCommands`] when more than one switch names a
/// command. Unknown switches are collected, not rejected.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, UsageError> {
    let mut switches = Vec::new();
    let mut rest = args.iter();
    let mut params = Vec::new();

    for arg in rest.by_ref() {
        let arg = arg.as_ref();
        match strip_switch_prefix(arg) {
            Some(switch) => switches.push(switch.to_uppercase()),
            None => {
                params.push(arg.to_string());
                break;
            }
        }
    }
    params.extend(rest.map(|a| a.as_ref().to_string()));

    if switches.is_empty() {
        return Err(UsageError::TooFewArguments);
    }

    let commands: Vec<Command> = switches
        .iter()
        .filter_map(|s| Command::from_switch(s))
        .collect();
    if commands.len() > 1 {
        return Err(UsageError::MultipleCommands);
    }

    let unknown_switches = switches
        .iter()
        .filter(|s| Command::from_switch(s).is_none())
        .cloned()
        .collect();

    Ok(Invocation {
        command: commands.first().copied(),
        unknown_switches,
        switches,
        params,
    })
}

// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use crate::types::ReportError;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs`
/// struct containing the parsed values. If parsing fails (e.g., unexpected
/// arguments or the --help flag), clap will automatically display an error
/// message or help text and exit the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Prompt interactively for the input file path
///
/// Used when no INPUT argument was supplied: prints `File Name: ` to
/// stdout and reads one line from stdin, trimming surrounding
/// whitespace.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The entered path
/// * `Err(ReportError::Io)` if stdin or stdout fails
pub fn prompt_for_input_path() -> Result<PathBuf, ReportError> {
    print!("File Name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim()))
}

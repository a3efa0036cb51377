//! Sales Report Engine CLI
//!
//! Command-line interface for generating a sales report from a CSV file
//! of e-commerce transactions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.csv
//! cargo run    # prompts "File Name: " on stdin
//! ```
//!
//! The program loads transaction records from the input CSV file, runs the
//! aggregation-and-analysis pipeline, prints the report to stdout, and
//! writes the same text to `report.txt` in the working directory.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (source not found, no valid rows, report not writable, etc.)

use sales_report_engine::cli::{self, CliArgs};
use sales_report_engine::pipeline;
use sales_report_engine::types::ReportError;
use std::fs;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the full pipeline for the resolved input path
///
/// Resolves the input path (argument or interactive prompt), generates
/// the report, prints it to stdout, and writes it to the fixed-name
/// report file.
fn run(args: CliArgs) -> Result<(), ReportError> {
    let input_path = match args.input_file {
        Some(path) => path,
        None => cli::prompt_for_input_path()?,
    };

    let report = pipeline::generate_report(&input_path)?;

    println!("{}", report);
    fs::write(pipeline::REPORT_FILE_NAME, &report)?;

    Ok(())
}

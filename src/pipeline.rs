//! Report generation pipeline
//!
//! Wires the four stages together: load the transactions, aggregate
//! them by category, analyze purchase patterns, and render the report
//! text. The first fatal error aborts the run; row-level skips inside
//! the loader never surface here.

use crate::core::{aggregate_by_category, analyze_purchase_patterns, format_report};
use crate::io::load_transactions;
use crate::types::ReportError;
use std::path::Path;

/// Fixed name of the report file written next to the working directory
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Generate the full sales report for a CSV source
///
/// Runs the complete pipeline and returns the report text. The caller
/// decides what to do with it (print it, write it to
/// [`REPORT_FILE_NAME`], or both).
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV file
///
/// # Returns
///
/// * `Ok(String)` - The rendered report
/// * `Err(ReportError::SourceNotFound)` if the input path does not exist
/// * `Err(ReportError::Io)` for any other open failure
/// * `Err(ReportError::EmptyDataset)` if no valid rows were loaded
pub fn generate_report(input_path: &Path) -> Result<String, ReportError> {
    let transactions = load_transactions(input_path)?;
    let summaries = aggregate_by_category(&transactions);
    let analysis = analyze_purchase_patterns(&transactions, &summaries)?;
    Ok(format_report(&summaries, &analysis))
}

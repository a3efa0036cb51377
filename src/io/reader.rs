//! Synchronous CSV loader with iterator interface
//!
//! Provides a streaming iterator over valid transaction records from a CSV
//! file, plus the collecting [`load_transactions`] entry point used by the
//! pipeline. Delegates CSV format concerns to the csv_format module.
//!
//! # Row-Filtering Policy
//!
//! Ingestion is best-effort by contract: any row whose CSV parse fails, whose
//! required column is missing, or whose numeric conversion fails is skipped
//! silently. The iterator yields only fully valid `Transaction` values, in
//! source row order, with no per-row diagnostics and no skip counter. Partial
//! or corrupt rows are common in real extracts and must not abort the load.
//!
//! # Error Handling
//!
//! The only fatal condition is failing to open the source:
//! - A missing path yields `ReportError::SourceNotFound`
//! - Any other open failure yields `ReportError::Io`

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{ReportError, Transaction};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over the valid transactions in a CSV file
///
/// Implements `Iterator<Item = Transaction>`: invalid rows are consumed
/// and dropped inside `next`, so callers only ever see valid records.
///
/// # Examples
///
/// ```no_run
/// use sales_report_engine::io::reader::TransactionReader;
/// use std::path::Path;
///
/// let reader = TransactionReader::new(Path::new("sales.csv")).unwrap();
/// let transactions: Vec<_> = reader.collect();
/// println!("Loaded {} transactions", transactions.len());
/// ```
#[derive(Debug)]
pub struct TransactionReader {
    reader: csv::Reader<File>,
}

impl TransactionReader {
    /// Create a new TransactionReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (short rows fail per-row, not fatally)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionReader)` if the file opened successfully
    /// * `Err(ReportError::SourceNotFound)` if the path does not exist
    /// * `Err(ReportError::Io)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReportError::source_not_found(path),
            _ => ReportError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader })
    }
}

impl Iterator for TransactionReader {
    type Item = Transaction;

    /// Get the next valid transaction from the CSV file
    ///
    /// Reads CSV rows until one deserializes and converts cleanly,
    /// dropping every row that fails along the way.
    ///
    /// # Returns
    ///
    /// * `Some(Transaction)` - Next valid record in source order
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut records = self.reader.deserialize::<CsvRecord>();

        loop {
            match records.next()? {
                Ok(csv_record) => {
                    if let Ok(transaction) = convert_csv_record(csv_record) {
                        return Some(transaction);
                    }
                    // Conversion failed, row skipped
                }
                Err(_) => {
                    // CSV parse failed, row skipped
                }
            }
        }
    }
}

/// Load all valid transactions from a CSV file
///
/// This is the loader contract used by the pipeline: it opens the source,
/// streams every row through the row-filtering reader, and collects the
/// surviving transactions in source order.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Returns
///
/// * `Ok(Vec<Transaction>)` - All valid records (possibly empty)
/// * `Err(ReportError)` - Only when the source cannot be opened
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, ReportError> {
    Ok(TransactionReader::new(path)?.collect())
}

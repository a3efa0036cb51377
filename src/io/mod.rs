//! I/O module
//!
//! Handles CSV parsing and loading.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header mapping, record conversion)
//! - `reader` - Synchronous CSV loader with iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_csv_record, CsvRecord};
pub use reader::{load_transactions, TransactionReader};

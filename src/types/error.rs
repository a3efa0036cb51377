//! Error types for the Sales Report Engine
//!
//! This module defines all error types that can occur while generating a report.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Source not found, permission denied, report write failures
//! - **Analysis Errors**: Attempting to analyze an empty dataset
//!
//! Row-level failures are deliberately absent from this taxonomy: a CSV row that
//! fails parsing or type conversion is dropped inside the loader and never
//! surfaces as an error.

use thiserror::Error;

/// Main error type for the sales report engine
///
/// This enum represents all fatal errors that can occur during report
/// generation. Each variant includes relevant context to help diagnose
/// and resolve the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Input source not found at the specified path
    ///
    /// This is a fatal error that prevents the load from starting.
    #[error("Source not found: {path}")]
    SourceNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the source or writing the report
    ///
    /// This is a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Analysis was attempted over zero transactions
    ///
    /// Raised explicitly before any average is computed, so an empty
    /// dataset never turns into a division fault.
    #[error("No transaction data to analyze")]
    EmptyDataset,
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create a SourceNotFound error from a path
    pub fn source_not_found(path: &std::path::Path) -> Self {
        ReportError::SourceNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an Io error from a message
    pub fn io(message: &str) -> Self {
        ReportError::Io {
            message: message.to_string(),
        }
    }
}

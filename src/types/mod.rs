//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The purchase record produced by the loader
//! - `summary`: Per-category summaries and their insertion-ordered collection
//! - `analysis`: Derived statistics produced by the analyzer
//! - `error`: Error types for the sales report engine

pub mod analysis;
pub mod error;
pub mod summary;
pub mod transaction;

pub use analysis::AnalysisResult;
pub use error::ReportError;
pub use summary::{CategorySummaries, CategorySummary};
pub use transaction::Transaction;

//! Core business logic module
//!
//! This module contains the pure transformation stages of the pipeline:
//! - `aggregator` - Groups transactions into per-category summaries
//! - `analyzer` - Derives overall statistics and top-5 selections
//! - `formatter` - Renders the fixed-layout report text

pub mod aggregator;
pub mod analyzer;
pub mod formatter;

pub use aggregator::aggregate_by_category;
pub use analyzer::{analyze_purchase_patterns, TOP_LIST_LEN};
pub use formatter::format_report;

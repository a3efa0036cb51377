//! Sales Report Engine Library
//! # Overview
//!
//! This library turns a CSV file of e-commerce transactions into a
//! fixed-format plain-text sales report.
//!
//! # Architecture
//!
//! The system is a linear pipeline of pure transformations:
//!
//! - [`types`] - Core data types (Transaction, CategorySummary, etc.)
//! - [`cli`] - CLI argument parsing and the interactive filename prompt
//! - [`io`] - CSV loading with best-effort row filtering
//! - [`core`] - Business logic components:
//!   - [`core::aggregator`] - Per-category counts, totals, and averages
//!   - [`core::analyzer`] - Overall statistics and top-5 selections
//!   - [`core::formatter`] - Fixed-layout report rendering
//! - [`pipeline`] - Orchestration: load, aggregate, analyze, format
//!
//! # Row-Filtering Policy
//!
//! Loading is best-effort: rows that fail CSV parsing or numeric
//! conversion are dropped silently, so a partially corrupt extract
//! still produces a report from its valid rows. The only fatal loader
//! condition is a source that cannot be opened at all.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{aggregate_by_category, analyze_purchase_patterns, format_report, TOP_LIST_LEN};
pub use io::load_transactions;
pub use pipeline::generate_report;
pub use types::{AnalysisResult, CategorySummaries, CategorySummary, ReportError, Transaction};

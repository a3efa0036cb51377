//! Analysis result types
//!
//! This module defines the derived snapshot produced by the analyzer.
//! Every field is an independent derivation over the loaded transactions
//! and the aggregated summaries; nothing here is mutated after
//! construction, and the whole snapshot is discarded once the report
//! has been rendered.

use crate::types::{CategorySummary, Transaction};
use rust_decimal::Decimal;

/// Derived statistics over the full transaction list
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Mean purchase amount over all transactions
    pub average_purchase: Decimal,

    /// Up to five `(category, summary)` pairs with the highest average
    /// purchase amount, descending; ties keep aggregator order
    pub top_categories: Vec<(String, CategorySummary)>,

    /// Up to five transactions ordered by age ascending, then amount
    /// descending within equal age
    pub top_purchases_by_youngest: Vec<Transaction>,

    /// Up to five transactions ordered by age descending, then amount
    /// descending within equal age
    pub top_purchases_by_oldest: Vec<Transaction>,
}

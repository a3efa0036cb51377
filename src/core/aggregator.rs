//! Per-category aggregation
//!
//! Groups loaded transactions by product category, accumulating a count
//! and total per category before deriving averages in a second pass.
//!
//! # Ordering
//!
//! The returned collection iterates categories in order of first
//! appearance in the input. The formatter's "Sales by Category" section
//! consumes that order verbatim, so it is part of the contract here,
//! not a presentation detail.

use crate::types::{CategorySummaries, Transaction};
use rust_decimal::Decimal;

/// Aggregate transactions into per-category summaries
///
/// Two passes:
/// 1. For each transaction, create the category's entry on first sight
///    (count 0, total 0) and accumulate count and amount into it.
/// 2. Derive `average_amount = total_amount / count` for every entry.
///
/// Every category present in the result has `count >= 1`, so the
/// division in the second pass cannot fail. Empty input yields an
/// empty collection; there are no error conditions.
///
/// # Arguments
///
/// * `transactions` - The loaded transactions, in source order
///
/// # Returns
///
/// Insertion-ordered mapping of category name to its summary
pub fn aggregate_by_category(transactions: &[Transaction]) -> CategorySummaries {
    let mut summaries = CategorySummaries::new();

    for transaction in transactions {
        let entry = summaries.entry_mut(&transaction.category);
        entry.count += 1;
        entry.total_amount += transaction.amount;
    }

    for summary in summaries.values_mut() {
        summary.average_amount = summary.total_amount / Decimal::from(summary.count);
    }

    summaries
}

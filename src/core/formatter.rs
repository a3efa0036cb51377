//! Report rendering
//!
//! Renders the aggregated summaries and the analysis snapshot into the
//! fixed plain-text report layout. This is a pure function of its two
//! inputs: no I/O, no randomness, no locale-dependent formatting.
//! Monetary values always print with exactly two decimal digits and a
//! period separator.

use crate::types::{AnalysisResult, CategorySummaries, Transaction};
use rust_decimal::{Decimal, RoundingStrategy};

/// Width of the left-aligned category column
const CATEGORY_COLUMN_WIDTH: usize = 15;

/// Width of the right-aligned count column
const COUNT_COLUMN_WIDTH: usize = 5;

/// Rule under the report title
const TITLE_RULE: &str = "==============================";

/// Rule under each section heading
const SECTION_RULE: &str = "------------------------------";

/// Render the full sales report
///
/// Section order is fixed: title, overall average, "Sales by Category"
/// in the aggregator's first-seen order, top categories by average,
/// top purchases among the youngest users, top purchases among the
/// oldest users. Lines are joined with `\n` and the result carries no
/// trailing newline.
///
/// # Arguments
///
/// * `summaries` - The aggregator output, iterated in first-seen order
/// * `analysis` - The analyzer snapshot for the same transactions
///
/// # Returns
///
/// The complete report text
pub fn format_report(summaries: &CategorySummaries, analysis: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("E-COMMERCE SALES REPORT".to_string());
    lines.push(TITLE_RULE.to_string());
    lines.push(String::new());
    lines.push(format!(
        "Average purchase amount: ${}",
        money(analysis.average_purchase)
    ));

    lines.push(String::new());
    lines.push("Sales by Category:".to_string());
    lines.push(SECTION_RULE.to_string());
    for (name, summary) in summaries.iter() {
        lines.push(format!(
            "{:<cat$} | Count: {:>cnt$} | Total: ${}",
            name,
            summary.count,
            money(summary.total_amount),
            cat = CATEGORY_COLUMN_WIDTH,
            cnt = COUNT_COLUMN_WIDTH,
        ));
    }

    lines.push(String::new());
    lines.push("Top Categories by Average Purchase:".to_string());
    lines.push(SECTION_RULE.to_string());
    for (name, summary) in &analysis.top_categories {
        lines.push(format!(
            "{:<cat$} | Average purchase: ${}",
            name,
            money(summary.average_amount),
            cat = CATEGORY_COLUMN_WIDTH,
        ));
    }

    lines.push(String::new());
    lines.push("Top Large Purchases Among the Youngest Users:".to_string());
    lines.push(SECTION_RULE.to_string());
    for transaction in &analysis.top_purchases_by_youngest {
        lines.push(purchase_line(transaction));
    }

    lines.push(String::new());
    lines.push("Top Large Purchases Among the Oldest Users:".to_string());
    lines.push(SECTION_RULE.to_string());
    for transaction in &analysis.top_purchases_by_oldest {
        lines.push(purchase_line(transaction));
    }

    lines.join("\n")
}

/// Render one line of a top-purchases section
fn purchase_line(transaction: &Transaction) -> String {
    format!(
        "{} ({} y.o.) - ${}",
        transaction.user,
        transaction.age,
        money(transaction.amount)
    )
}

/// Format a monetary value with exactly two decimal digits
///
/// Rounds to cents first (midpoint away from zero, printf-style), then
/// formats with `{:.2}` for zero-padding. `Decimal`'s own precision
/// formatting truncates excess digits, so a derived average like
/// 126.9166... must be rounded here to print as 126.92 rather than
/// 126.91.
fn money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

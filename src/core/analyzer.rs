//! Purchase pattern analysis
//!
//! Derives the overall average purchase amount and three top-5
//! selections from the loaded transactions and the aggregated
//! summaries. Every derivation is independent and leaves its inputs
//! untouched.
//!
//! # Ordering Guarantees
//!
//! All selections use stable sorts with explicit composite comparators,
//! so ties keep their original relative order:
//! - Top categories: `average_amount` descending, ties in aggregator order
//! - Youngest purchases: age ascending, then amount descending
//! - Oldest purchases: age descending, then amount descending

use crate::types::{AnalysisResult, CategorySummaries, CategorySummary, ReportError, Transaction};
use rust_decimal::Decimal;

/// Number of entries in each top list
pub const TOP_LIST_LEN: usize = 5;

/// Analyze purchase patterns over the loaded transactions
///
/// Computes the overall average purchase amount and the three top-5
/// selections. Fails before any division when the transaction slice is
/// empty, so a zero count can never produce an arithmetic fault.
///
/// # Arguments
///
/// * `transactions` - The loaded transactions, in source order
/// * `summaries` - The aggregator output for the same transactions
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - The derived snapshot
/// * `Err(ReportError::EmptyDataset)` if `transactions` is empty
pub fn analyze_purchase_patterns(
    transactions: &[Transaction],
    summaries: &CategorySummaries,
) -> Result<AnalysisResult, ReportError> {
    if transactions.is_empty() {
        return Err(ReportError::EmptyDataset);
    }

    let total: Decimal = transactions.iter().map(|t| t.amount).sum();
    let average_purchase = total / Decimal::from(transactions.len() as u64);

    // Stable sort keeps aggregator insertion order for equal averages
    let mut top_categories: Vec<(String, CategorySummary)> = summaries
        .iter()
        .map(|(name, summary)| (name.to_string(), summary.clone()))
        .collect();
    top_categories.sort_by(|a, b| b.1.average_amount.cmp(&a.1.average_amount));
    top_categories.truncate(TOP_LIST_LEN);

    let mut top_purchases_by_youngest = transactions.to_vec();
    top_purchases_by_youngest
        .sort_by(|a, b| a.age.cmp(&b.age).then_with(|| b.amount.cmp(&a.amount)));
    top_purchases_by_youngest.truncate(TOP_LIST_LEN);

    let mut top_purchases_by_oldest = transactions.to_vec();
    top_purchases_by_oldest
        .sort_by(|a, b| b.age.cmp(&a.age).then_with(|| b.amount.cmp(&a.amount)));
    top_purchases_by_oldest.truncate(TOP_LIST_LEN);

    Ok(AnalysisResult {
        average_purchase,
        top_categories,
        top_purchases_by_youngest,
        top_purchases_by_oldest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::aggregate_by_category;
    use std::str::FromStr;

    fn transaction(id: &str, user: &str, age: u32, category: &str, amount: &str) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            user: user.to_string(),
            age,
            country: "USA".to_string(),
            category: category.to_string(),
            amount: Decimal::from_str(amount).expect("invalid test amount"),
            payment_method: "Credit Card".to_string(),
            date: "2024-01-15".to_string(),
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            transaction("T1", "Alice", 34, "Sports", "231.72"),
            transaction("T2", "Bob", 22, "Toys", "259.55"),
            transaction("T3", "Carol", 45, "Home & Kitchen", "773.13"),
            transaction("T4", "David", 29, "Books", "431.34"),
            transaction("T5", "Eva", 22, "Clothing", "666.47"),
            transaction("T6", "Frank", 61, "Clothing", "15.11"),
            transaction("T7", "Grace", 18, "Grocery", "171.25"),
            transaction("T8", "Henry", 53, "Electronics", "529.78"),
        ]
    }

    #[test]
    fn test_analyze_empty_dataset_is_an_error() {
        let summaries = aggregate_by_category(&[]);
        let result = analyze_purchase_patterns(&[], &summaries);
        assert_eq!(result, Err(ReportError::EmptyDataset));
    }

    #[test]
    fn test_analyze_average_purchase() {
        let transactions = sample_transactions();
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        // 3078.35 / 8
        assert_eq!(
            analysis.average_purchase,
            Decimal::from_str("384.79375").unwrap()
        );
    }

    #[test]
    fn test_analyze_top_categories_by_average_descending() {
        let transactions = sample_transactions();
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        let names: Vec<_> = analysis
            .top_categories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Home & Kitchen", "Electronics", "Books", "Clothing", "Toys"]
        );
    }

    #[test]
    fn test_analyze_top_categories_ties_keep_aggregator_order() {
        let transactions = vec![
            transaction("T1", "Alice", 30, "Sports", "100.00"),
            transaction("T2", "Bob", 31, "Toys", "100.00"),
            transaction("T3", "Carol", 32, "Books", "100.00"),
        ];
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        let names: Vec<_> = analysis
            .top_categories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Sports", "Toys", "Books"]);
    }

    #[test]
    fn test_analyze_youngest_orders_by_age_then_amount() {
        let transactions = sample_transactions();
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        let users: Vec<_> = analysis
            .top_purchases_by_youngest
            .iter()
            .map(|t| t.user.as_str())
            .collect();
        // Eva and Bob are both 22; Eva's larger amount ranks first
        assert_eq!(users, vec!["Grace", "Eva", "Bob", "David", "Alice"]);
    }

    #[test]
    fn test_analyze_oldest_orders_by_age_then_amount() {
        let transactions = sample_transactions();
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        let users: Vec<_> = analysis
            .top_purchases_by_oldest
            .iter()
            .map(|t| t.user.as_str())
            .collect();
        assert_eq!(users, vec!["Frank", "Henry", "Carol", "Alice", "David"]);
    }

    #[test]
    fn test_analyze_equal_age_and_amount_keeps_source_order() {
        let transactions = vec![
            transaction("T1", "Alice", 25, "Sports", "100.00"),
            transaction("T2", "Bob", 25, "Sports", "100.00"),
            transaction("T3", "Carol", 25, "Sports", "100.00"),
        ];
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        let users: Vec<_> = analysis
            .top_purchases_by_youngest
            .iter()
            .map(|t| t.user.as_str())
            .collect();
        assert_eq!(users, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_analyze_top_lists_are_truncated_to_five() {
        let transactions: Vec<_> = (0..8)
            .map(|i| {
                transaction(
                    &format!("T{i}"),
                    &format!("User {i}"),
                    20 + i,
                    &format!("Category {i}"),
                    "10.00",
                )
            })
            .collect();
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        assert_eq!(analysis.top_categories.len(), TOP_LIST_LEN);
        assert_eq!(analysis.top_purchases_by_youngest.len(), TOP_LIST_LEN);
        assert_eq!(analysis.top_purchases_by_oldest.len(), TOP_LIST_LEN);
    }

    #[test]
    fn test_analyze_top_lists_shorter_than_five_when_data_is() {
        let transactions = vec![
            transaction("T1", "Alice", 34, "Sports", "231.72"),
            transaction("T2", "Bob", 22, "Toys", "259.55"),
        ];
        let summaries = aggregate_by_category(&transactions);
        let analysis = analyze_purchase_patterns(&transactions, &summaries).unwrap();

        assert_eq!(analysis.top_categories.len(), 2);
        assert_eq!(analysis.top_purchases_by_youngest.len(), 2);
        assert_eq!(analysis.top_purchases_by_oldest.len(), 2);
    }

    #[test]
    fn test_analyze_does_not_mutate_inputs() {
        let transactions = sample_transactions();
        let summaries = aggregate_by_category(&transactions);

        let transactions_before = transactions.clone();
        let summaries_before = summaries.clone();
        analyze_purchase_patterns(&transactions, &summaries).unwrap();

        assert_eq!(transactions, transactions_before);
        assert_eq!(summaries, summaries_before);
    }
}

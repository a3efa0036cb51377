//! Per-category summary types
//!
//! This module defines the per-category accumulation record and the
//! insertion-ordered collection of summaries built by the aggregator.
//! Iteration order of the collection is the order in which categories
//! were first seen in the input, which the formatter relies on for the
//! "Sales by Category" section.

use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Summary of all transactions within one product category
///
/// Built in two passes by the aggregator: counts and totals are
/// accumulated first, averages are derived afterwards. Once the
/// aggregator returns, every present summary has `count >= 1` and a
/// defined `average_amount`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    /// Number of transactions in this category
    pub count: u64,

    /// Sum of purchase amounts in this category
    pub total_amount: Decimal,

    /// `total_amount / count`, derived after accumulation completes
    pub average_amount: Decimal,
}

/// Insertion-ordered mapping of category name to its summary
///
/// Wraps a `HashMap` for lookups plus a separate first-seen key list,
/// so iteration yields categories in the order they first appeared in
/// the input sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummaries {
    /// Map of category names to summaries
    entries: HashMap<String, CategorySummary>,

    /// Category names in order of first appearance
    order: Vec<String>,
}

impl CategorySummaries {
    /// Create an empty collection
    pub fn new() -> Self {
        CategorySummaries::default()
    }

    /// Get a mutable reference to the summary for a category
    ///
    /// Creates a zeroed summary on first sight of the category and
    /// records the category at the end of the first-seen order.
    ///
    /// # Arguments
    ///
    /// * `category` - The category name to get or create a summary for
    pub fn entry_mut(&mut self, category: &str) -> &mut CategorySummary {
        match self.entries.entry(category.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(category.to_string());
                entry.insert(CategorySummary::default())
            }
        }
    }

    /// Look up the summary for a category, if present
    pub fn get(&self, category: &str) -> Option<&CategorySummary> {
        self.entries.get(category)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no categories are present
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(category, summary)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySummary)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), &self.entries[name]))
    }

    /// Iterate mutably over all summaries
    ///
    /// Used by the aggregator's second pass; visiting order is
    /// unspecified because the pass touches every entry independently.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut CategorySummary> {
        self.entries.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_mut_creates_zeroed_summary() {
        let mut summaries = CategorySummaries::new();
        let entry = summaries.entry_mut("Books");

        assert_eq!(entry.count, 0);
        assert_eq!(entry.total_amount, Decimal::ZERO);
        assert_eq!(entry.average_amount, Decimal::ZERO);
    }

    #[test]
    fn test_entry_mut_returns_existing_summary() {
        let mut summaries = CategorySummaries::new();
        summaries.entry_mut("Books").count = 3;

        assert_eq!(summaries.entry_mut("Books").count, 3);
        assert_eq!(summaries.len(), 1);
    }

    #[test]
    fn test_iter_preserves_first_seen_order() {
        let mut summaries = CategorySummaries::new();
        summaries.entry_mut("Sports");
        summaries.entry_mut("Books");
        summaries.entry_mut("Sports");
        summaries.entry_mut("Toys");

        let order: Vec<_> = summaries.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Sports", "Books", "Toys"]);
    }

    #[test]
    fn test_empty_collection() {
        let summaries = CategorySummaries::new();
        assert!(summaries.is_empty());
        assert_eq!(summaries.len(), 0);
        assert_eq!(summaries.iter().count(), 0);
        assert_eq!(summaries.get("Books"), None);
    }
}

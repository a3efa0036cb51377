//! Transaction types for the Sales Report Engine
//!
//! This module defines the purchase record produced by the loader and
//! consumed read-only by the aggregation and analysis stages.

use rust_decimal::Decimal;

/// A single e-commerce purchase record
///
/// Constructed once by the loader from a validated CSV row and never
/// mutated afterwards. A row that fails any field conversion produces
/// no `Transaction` at all, so partial records cannot exist downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Opaque transaction identifier, copied verbatim from the source
    pub transaction_id: String,

    /// Display name of the purchasing user
    pub user: String,

    /// Age of the purchasing user in years
    pub age: u32,

    /// Country the purchase was made from
    pub country: String,

    /// Product category, the grouping key for aggregation
    pub category: String,

    /// Purchase amount, non-negative
    ///
    /// Stored as a `Decimal` so monetary sums and averages stay exact.
    pub amount: Decimal,

    /// Payment method used for the purchase
    pub payment_method: String,

    /// Transaction date in `YYYY-MM-DD` form
    ///
    /// Treated as an opaque string; nothing in the pipeline parses it.
    pub date: String,
}

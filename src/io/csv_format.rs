//! CSV format handling for transaction records
//!
//! This module centralizes the input CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to the domain Transaction type
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::Transaction;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format by exact, case-sensitive header names.
/// Every field is read as a string; numeric conversion happens in
/// [`convert_csv_record`] so a row with a malformed number fails as a
/// whole instead of half-deserializing.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "Transaction_ID")]
    pub transaction_id: String,
    #[serde(rename = "User_Name")]
    pub user: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Product_Category")]
    pub category: String,
    #[serde(rename = "Purchase_Amount")]
    pub amount: String,
    #[serde(rename = "Payment_Method")]
    pub payment_method: String,
    #[serde(rename = "Transaction_Date")]
    pub date: String,
}

/// Convert a CsvRecord to a Transaction
///
/// This function:
/// - Parses the age string into a non-negative integer
/// - Parses the amount string into a Decimal and rejects negative values
/// - Copies the remaining columns verbatim as strings
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(Transaction) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, String> {
    let age = csv_record.age.trim().parse::<u32>().map_err(|_| {
        format!(
            "Invalid age '{}' for transaction {}",
            csv_record.age, csv_record.transaction_id
        )
    })?;

    let amount = Decimal::from_str(csv_record.amount.trim()).map_err(|_| {
        format!(
            "Invalid amount '{}' for transaction {}",
            csv_record.amount, csv_record.transaction_id
        )
    })?;

    if amount.is_sign_negative() {
        return Err(format!(
            "Negative amount '{}' for transaction {}",
            csv_record.amount, csv_record.transaction_id
        ));
    }

    Ok(Transaction {
        transaction_id: csv_record.transaction_id,
        user: csv_record.user,
        age,
        country: csv_record.country,
        category: csv_record.category,
        amount,
        payment_method: csv_record.payment_method,
        date: csv_record.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_record() -> CsvRecord {
        CsvRecord {
            transaction_id: "T0001".to_string(),
            user: "Alice Johnson".to_string(),
            age: "34".to_string(),
            country: "USA".to_string(),
            category: "Sports".to_string(),
            amount: "231.72".to_string(),
            payment_method: "Credit Card".to_string(),
            date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn test_convert_csv_record_valid() {
        let result = convert_csv_record(sample_record());
        assert!(result.is_ok());

        let transaction = result.unwrap();
        assert_eq!(transaction.transaction_id, "T0001");
        assert_eq!(transaction.user, "Alice Johnson");
        assert_eq!(transaction.age, 34);
        assert_eq!(transaction.country, "USA");
        assert_eq!(transaction.category, "Sports");
        assert_eq!(transaction.amount, Decimal::new(23172, 2));
        assert_eq!(transaction.payment_method, "Credit Card");
        assert_eq!(transaction.date, "2024-01-15");
    }

    #[rstest]
    #[case::whitespace_age("  34  ", "100.0", 34, Decimal::new(1000, 1))]
    #[case::whitespace_amount("34", "  100.0  ", 34, Decimal::new(1000, 1))]
    #[case::zero_age("0", "15.11", 0, Decimal::new(1511, 2))]
    #[case::zero_amount("34", "0.00", 34, Decimal::ZERO)]
    fn test_convert_csv_record_numeric_parsing(
        #[case] age: &str,
        #[case] amount: &str,
        #[case] expected_age: u32,
        #[case] expected_amount: Decimal,
    ) {
        let mut record = sample_record();
        record.age = age.to_string();
        record.amount = amount.to_string();

        let result = convert_csv_record(record);
        assert!(result.is_ok());

        let transaction = result.unwrap();
        assert_eq!(transaction.age, expected_age);
        assert_eq!(transaction.amount, expected_amount);
    }

    #[rstest]
    #[case::non_numeric_age("abc", "100.0", "Invalid age")]
    #[case::negative_age("-5", "100.0", "Invalid age")]
    #[case::fractional_age("34.5", "100.0", "Invalid age")]
    #[case::empty_age("", "100.0", "Invalid age")]
    #[case::non_numeric_amount("34", "not_a_number", "Invalid amount")]
    #[case::empty_amount("34", "", "Invalid amount")]
    #[case::negative_amount("34", "-3.00", "Negative amount")]
    fn test_convert_csv_record_errors(
        #[case] age: &str,
        #[case] amount: &str,
        #[case] expected_error: &str,
    ) {
        let mut record = sample_record();
        record.age = age.to_string();
        record.amount = amount.to_string();

        let result = convert_csv_record(record);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(expected_error));
    }
}

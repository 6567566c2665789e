use crate::error::IngestError;
use csv::StringRecord;
use std::collections::HashMap;

/// The internal column names every aggregate is defined against.
/// Raw headers may differ in spacing and punctuation; after
/// `normalize_header` they must match these exactly.
pub const TRANSACTION_DATE: &str = "Transaction_Date";
pub const PURCHASE_AMOUNT: &str = "Purchase_Amount";
pub const PRODUCT_CATEGORY: &str = "Product_Category";
pub const COUNTRY: &str = "Country";
pub const USER_NAME: &str = "User_Name";
pub const AGE: &str = "Age";
pub const PAYMENT_METHOD: &str = "Payment_Method";

/// Canonicalizes a raw header name: spaces and hyphens become
/// underscores, parentheses are stripped. `"Purchase Amount"` and
/// `"Purchase-Amount"` both normalize to `"Purchase_Amount"`.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '(' | ')' => None,
            other => Some(other),
        })
        .collect()
}

/// The resolved position of each required column in the source file.
///
/// Built once from the header row; this is the single point where a
/// schema mismatch can surface. Extra columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub amount: usize,
    pub category: usize,
    pub country: usize,
    pub user_name: usize,
    pub age: usize,
    pub payment_method: usize,
}

impl ColumnLayout {
    /// Normalizes the header row and locates every required column,
    /// failing with the first missing name.
    pub fn resolve(headers: &StringRecord) -> Result<Self, IngestError> {
        let mut by_name: HashMap<String, usize> = HashMap::new();
        for (index, raw) in headers.iter().enumerate() {
            // First occurrence wins if a normalized name appears twice.
            by_name.entry(normalize_header(raw.trim())).or_insert(index);
        }

        let locate = |name: &'static str| -> Result<usize, IngestError> {
            by_name
                .get(name)
                .copied()
                .ok_or(IngestError::MissingColumn { name })
        };

        Ok(Self {
            date: locate(TRANSACTION_DATE)?,
            amount: locate(PURCHASE_AMOUNT)?,
            category: locate(PRODUCT_CATEGORY)?,
            country: locate(COUNTRY)?,
            user_name: locate(USER_NAME)?,
            age: locate(AGE)?,
            payment_method: locate(PAYMENT_METHOD)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_replaces_spaces_and_hyphens_and_strips_parens() {
        assert_eq!(normalize_header("Transaction Date"), "Transaction_Date");
        assert_eq!(normalize_header("Payment-Method"), "Payment_Method");
        assert_eq!(normalize_header("Purchase Amount (USD)"), "Purchase_Amount_USD");
        assert_eq!(normalize_header("Age"), "Age");
    }

    #[test]
    fn resolve_accepts_messy_headers_in_any_order() {
        let headers = StringRecord::from(vec![
            "User Name",
            "Transaction Date",
            "Purchase Amount",
            "Product Category",
            "Country",
            "Age",
            "Payment-Method",
        ]);
        let layout = ColumnLayout::resolve(&headers).unwrap();
        assert_eq!(layout.user_name, 0);
        assert_eq!(layout.date, 1);
        assert_eq!(layout.amount, 2);
        assert_eq!(layout.payment_method, 6);
    }

    #[test]
    fn resolve_ignores_extra_columns() {
        let headers = StringRecord::from(vec![
            "Transaction Date",
            "Purchase Amount",
            "Product Category",
            "Country",
            "User Name",
            "Age",
            "Payment Method",
            "Coupon Code",
        ]);
        assert!(ColumnLayout::resolve(&headers).is_ok());
    }

    #[test]
    fn resolve_names_the_missing_column() {
        let headers = StringRecord::from(vec![
            "Transaction Date",
            "Product Category",
            "Country",
            "User Name",
            "Age",
            "Payment Method",
        ]);
        match ColumnLayout::resolve(&headers) {
            Err(IngestError::MissingColumn { name }) => assert_eq!(name, PURCHASE_AMOUNT),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}

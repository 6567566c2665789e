use crate::enums::AgeBracket;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single e-commerce purchase, one row of the source file after
/// normalization and parsing.
///
/// The amount is kept as a `Decimal`; revenue semantics assume it is
/// non-negative but this is deliberately not enforced (garbage in,
/// garbage out). `age` is the only field that may be missing: a blank
/// age cell loads as `None` and such rows are simply excluded from the
/// age-based aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub country: String,
    pub user_name: String,
    pub age: Option<u32>,
    pub payment_method: String,
}

impl Transaction {
    /// The age bracket this purchase belongs to, when an age is present.
    ///
    /// This is the explicit derivation step for the age-group breakdown:
    /// callers group on the returned value instead of mutating the record.
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        self.age.map(AgeBracket::from_age)
    }

    /// The month-end date identifying this transaction's calendar month,
    /// used as the bucket key for the monthly series.
    pub fn month_bucket(&self) -> NaiveDate {
        month_end(self.date)
    }
}

/// Returns the last day of `date`'s calendar month.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // The first of the following month always exists; its predecessor is
    // the month end we want. The fallback is unreachable for valid dates.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats a monetary value with the configured symbol and thousands
/// separators, e.g. `$1,234.56`.
pub fn money(currency: &str, value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded < Decimal::ZERO {
        return format!("-{}", money(currency, -value));
    }
    let text = format!("{rounded:.2}");
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{currency}{}.{cents}", group_thousands(units))
}

/// Formats a row count with thousands separators, e.g. `1,234`.
pub fn count(value: usize) -> String {
    group_thousands(&value.to_string())
}

/// Formats a percentage rounded to two decimals, e.g. `57.14%`.
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

/// Formats a date the way the report narrates it, e.g. `February 01, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Formats a mean age, e.g. `28.33 years`.
pub fn years(value: Decimal) -> String {
    format!("{:.2} years", value.round_dp(2))
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

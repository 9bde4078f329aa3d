//! Field validation
//!
//! Pure predicates and single-shot parsers for the raw strings a user types.
//! Nothing here loops or prompts; callers decide whether to ask again.

use chrono::NaiveDate;

use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Money};

/// Canonical date format, `DD.MM.YYYY`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Largest amount a single record may hold. Ledger totals stay far below
/// the `Money` range at this size.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// True iff the text is exactly `\d{2}\.\d{2}\.\d{4}` and names a real
/// calendar date (day and month ranges, leap years)
pub fn is_valid_date(text: &str) -> bool {
    matches_date_pattern(text) && NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
}

/// True iff the text is exactly one of the canonical category labels
pub fn is_valid_category(text: &str) -> bool {
    Category::from_label(text).is_some()
}

/// True iff the text is a non-negative decimal amount
pub fn is_valid_amount(text: &str) -> bool {
    parse_amount(text).is_ok()
}

/// Parse a `DD.MM.YYYY` date
pub fn parse_date(text: &str) -> WalletResult<NaiveDate> {
    if !matches_date_pattern(text) {
        return Err(WalletError::validation(
            "date",
            format!("'{}' is not in DD.MM.YYYY format", text),
        ));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        WalletError::validation("date", format!("'{}' is not a calendar date", text))
    })
}

/// Parse a canonical category label
pub fn parse_category(text: &str) -> WalletResult<Category> {
    Category::from_label(text).ok_or_else(|| {
        WalletError::validation(
            "category",
            format!(
                "'{}' must be '{}' or '{}'",
                text,
                Category::Income.label(),
                Category::Expense.label()
            ),
        )
    })
}

/// Parse a non-negative amount no larger than `MAX_AMOUNT`
pub fn parse_amount(text: &str) -> WalletResult<Money> {
    let text = text.trim();
    if text.starts_with('-') {
        return Err(WalletError::validation(
            "amount",
            format!("'{}' must not be negative", text),
        ));
    }

    let amount =
        Money::parse(text).map_err(|e| WalletError::validation("amount", e.to_string()))?;

    if amount > MAX_AMOUNT {
        return Err(WalletError::validation(
            "amount",
            format!("'{}' is larger than {}", text, MAX_AMOUNT),
        ));
    }

    Ok(amount)
}

/// Format a date in the canonical form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Shape check for `\d{2}\.\d{2}\.\d{4}`; chrono alone would take a 5-digit year
fn matches_date_pattern(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

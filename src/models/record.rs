//! Record model
//!
//! One ledger entry. Records are values: editing builds a new record and
//! replaces the old one, fields are never mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use crate::error::{WalletError, WalletResult};
use crate::validation;

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    date: NaiveDate,
    category: Category,
    amount: Money,
    description: String,
}

/// Raw replacement values for an edit. `None` or an empty string keeps the
/// current value of that field.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl RecordEdit {
    /// Create an edit that keeps every field
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The value of a field in an edit, if it should change
fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Record {
    /// Create a record from typed values
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> WalletResult<Self> {
        if amount.is_negative() {
            return Err(WalletError::validation(
                "amount",
                format!("'{}' must not be negative", amount),
            ));
        }

        Ok(Self {
            date,
            category,
            amount,
            description: description.into(),
        })
    }

    /// Validate raw user input and build a record in one shot
    pub fn parse(date: &str, category: &str, amount: &str, description: &str) -> WalletResult<Self> {
        Self::new(
            validation::parse_date(date)?,
            validation::parse_category(category)?,
            validation::parse_amount(amount)?,
            description,
        )
    }

    /// Build the record that results from applying an edit to this one
    pub fn edited(&self, edit: &RecordEdit) -> WalletResult<Self> {
        let date = match supplied(&edit.date) {
            Some(raw) => validation::parse_date(raw)?,
            None => self.date,
        };
        let category = match supplied(&edit.category) {
            Some(raw) => validation::parse_category(raw)?,
            None => self.category,
        };
        let amount = match supplied(&edit.amount) {
            Some(raw) => validation::parse_amount(raw)?,
            None => self.amount,
        };
        let description = supplied(&edit.description).unwrap_or(&self.description);

        Self::new(date, category, amount, description)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date in canonical `DD.MM.YYYY` form
    pub fn date_text(&self) -> String {
        validation::format_date(self.date)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.date_text(),
            self.category,
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary() -> Record {
        Record::parse("01.01.2024", "Доход", "100", "salary").unwrap()
    }

    #[test]
    fn test_parse_valid_record() {
        let record = salary();
        assert_eq!(record.date_text(), "01.01.2024");
        assert_eq!(record.category(), Category::Income);
        assert_eq!(record.amount(), Money::from_units(100));
        assert_eq!(record.description(), "salary");
    }

    #[test]
    fn test_parse_rejects_each_field() {
        let err = Record::parse("31.02.2024", "Доход", "100", "").unwrap_err();
        assert!(matches!(err, WalletError::Validation { field: "date", .. }));

        let err = Record::parse("01.01.2024", "доход", "100", "").unwrap_err();
        assert!(matches!(err, WalletError::Validation { field: "category", .. }));

        let err = Record::parse("01.01.2024", "Доход", "ten", "").unwrap_err();
        assert!(matches!(err, WalletError::Validation { field: "amount", .. }));
    }

    #[test]
    fn test_empty_description_allowed() {
        let record = Record::parse("01.01.2024", "Расход", "5", "").unwrap();
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Record::new(date, Category::Expense, Money::from_cents(-1), "").is_err());
    }

    #[test]
    fn test_edit_keeps_unspecified_fields() {
        let record = salary();
        let edit = RecordEdit {
            date: Some(String::new()),
            category: Some("Расход".into()),
            amount: Some(String::new()),
            description: Some(String::new()),
        };

        let edited = record.edited(&edit).unwrap();
        assert_eq!(edited.date_text(), "01.01.2024");
        assert_eq!(edited.category(), Category::Expense);
        assert_eq!(edited.amount(), Money::from_units(100));
        assert_eq!(edited.description(), "salary");
        // the source record is untouched
        assert_eq!(record.category(), Category::Income);
    }

    #[test]
    fn test_edit_replaces_all_fields() {
        let edited = salary()
            .edited(
                &RecordEdit::new()
                    .date("02.02.2024")
                    .category("Расход")
                    .amount("12.5")
                    .description("coffee"),
            )
            .unwrap();

        assert_eq!(edited.to_string(), "02.02.2024 - Расход - 12.5 - coffee");
    }

    #[test]
    fn test_edit_rejects_bad_field() {
        let err = salary().edited(&RecordEdit::new().date("99.99.9999")).unwrap_err();
        assert!(err.is_validation());
    }
}

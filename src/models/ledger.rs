//! Ledger model
//!
//! The ordered sequence of records. Insertion order is display order and
//! file order. Aggregation and search are linear scans.

use serde::Serialize;

use super::category::Category;
use super::money::Money;
use super::record::Record;
use crate::error::{WalletError, WalletResult};

/// Income and expense totals over a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Balance {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`, may be negative
    pub balance: Money,
}

/// What to look for in a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact match on the `DD.MM.YYYY` text
    Date(String),
    /// Case-insensitive match on the category label
    Category(String),
    /// Exact amount match
    Amount(Money),
}

impl SearchCriterion {
    /// Check whether a record satisfies this criterion
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Date(text) => record.date_text() == *text,
            Self::Category(text) => record.category().matches_ignore_case(text),
            Self::Amount(amount) => record.amount() == *amount,
        }
    }
}

/// All records for the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from records in order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record at a zero-based index
    pub fn get(&self, index: usize) -> WalletResult<&Record> {
        self.records.get(index).ok_or(WalletError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Append a record
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record at a zero-based index, returning the old one
    pub fn replace(&mut self, index: usize, record: Record) -> WalletResult<Record> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(WalletError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    /// Sum income and expense
    ///
    /// Fails with `Overflow` instead of wrapping when a total leaves the
    /// range of `Money`.
    pub fn balance(&self) -> WalletResult<Balance> {
        let total = |category: Category| -> WalletResult<Money> {
            self.records
                .iter()
                .filter(|r| r.category() == category)
                .try_fold(Money::zero(), |acc, r| acc.checked_add(r.amount()))
                .ok_or_else(|| WalletError::Overflow(format!("{} total", category)))
        };

        let income = total(Category::Income)?;
        let expense = total(Category::Expense)?;
        let balance = income
            .checked_sub(expense)
            .ok_or_else(|| WalletError::Overflow("balance".to_string()))?;

        Ok(Balance {
            income,
            expense,
            balance,
        })
    }

    /// Records matching a criterion, in ledger order
    pub fn search(&self, criterion: SearchCriterion) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |r| criterion.matches(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, category: &str, amount: &str, description: &str) -> Record {
        Record::parse(date, category, amount, description).unwrap()
    }

    fn sample() -> Ledger {
        Ledger::from_records(vec![
            record("01.01.2024", "Доход", "100", "salary"),
            record("02.01.2024", "Доход", "50", "bonus"),
            record("02.01.2024", "Расход", "30", "groceries"),
        ])
    }

    #[test]
    fn test_balance() {
        let balance = sample().balance().unwrap();
        assert_eq!(balance.income, Money::from_units(150));
        assert_eq!(balance.expense, Money::from_units(30));
        assert_eq!(balance.balance, Money::from_units(120));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let ledger = Ledger::from_records(vec![record("01.01.2024", "Расход", "10.5", "")]);
        assert_eq!(ledger.balance().unwrap().balance.to_string(), "-10.5");
    }

    #[test]
    fn test_empty_balance_is_zero() {
        assert_eq!(Ledger::new().balance().unwrap(), Balance::default());
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ledger = Ledger::from_records(vec![
            Record::new(date, Category::Income, huge, "").unwrap(),
            Record::new(date, Category::Income, huge, "").unwrap(),
        ]);

        let err = ledger.balance().unwrap_err();
        assert!(matches!(err, WalletError::Overflow(_)));
    }

    #[test]
    fn test_search_by_category_ignores_case() {
        let ledger = sample();
        let criterion = SearchCriterion::Category("доход".into());
        let found: Vec<_> = ledger.search(criterion).map(Record::description).collect();
        assert_eq!(found, vec!["salary", "bonus"]);
    }

    #[test]
    fn test_search_by_date_is_exact() {
        let ledger = sample();
        assert_eq!(ledger.search(SearchCriterion::Date("02.01.2024".into())).count(), 2);
        assert_eq!(ledger.search(SearchCriterion::Date("2.01.2024".into())).count(), 0);
    }

    #[test]
    fn test_search_by_amount() {
        let ledger = sample();
        let found: Vec<_> = ledger
            .search(SearchCriterion::Amount(Money::from_units(50)))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description(), "bonus");
        assert_eq!(
            ledger.search(SearchCriterion::Amount(Money::from_cents(5001))).count(),
            0
        );
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut ledger = sample();
        let before = ledger.clone();
        let err = ledger
            .replace(99, record("01.01.2024", "Доход", "1", ""))
            .unwrap_err();
        assert!(matches!(err, WalletError::IndexOutOfRange { index: 99, len: 3 }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut ledger = sample();
        let old = ledger
            .replace(1, record("03.01.2024", "Расход", "7", "taxi"))
            .unwrap();
        assert_eq!(old.description(), "bonus");
        assert_eq!(ledger.get(1).unwrap().description(), "taxi");
        assert_eq!(ledger.len(), 3);
    }
}

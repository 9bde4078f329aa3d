//! Record category
//!
//! A record is either income or expense. The canonical labels are the exact
//! strings written to the ledger file and typed by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical label for income records
pub const INCOME_LABEL: &str = "Доход";

/// Canonical label for expense records
pub const EXPENSE_LABEL: &str = "Расход";

/// Classification of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Доход")]
    Income,
    #[serde(rename = "Расход")]
    Expense,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];

    /// The canonical label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => INCOME_LABEL,
            Self::Expense => EXPENSE_LABEL,
        }
    }

    /// Parse an exact, case-sensitive canonical label
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }

    /// Parse a label ignoring case (`доход`, `ДОХОД`)
    pub fn from_label_ignore_case(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.matches_ignore_case(s))
    }

    /// Case-insensitive comparison against the canonical label
    pub fn matches_ignore_case(&self, s: &str) -> bool {
        self.label().to_lowercase() == s.to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

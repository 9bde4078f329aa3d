//! Core data models for the wallet
//!
//! Records, the ledger that orders them, and the value types they are built
//! from.

pub mod category;
pub mod ledger;
pub mod money;
pub mod record;

pub use category::{Category, EXPENSE_LABEL, INCOME_LABEL};
pub use ledger::{Balance, Ledger, SearchCriterion};
pub use money::{Money, MoneyParseError};
pub use record::{Record, RecordEdit};

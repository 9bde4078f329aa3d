//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and balances for the console
//! and the CLI, plus the colour palette both use.

pub mod balance;
pub mod record;
pub mod style;

pub use balance::format_balance;
pub use record::{format_numbered_row, format_record_list, format_search_results};
pub use style::Palette;

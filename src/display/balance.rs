//! Balance display formatting

use super::style::Palette;
use crate::models::Balance;

/// Format the balance summary, balance first
pub fn format_balance(balance: &Balance, palette: &Palette) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n",
        palette.strong("Balance:"),
        balance.balance,
        palette.strong("Income:"),
        balance.income,
        palette.strong("Expense:"),
        balance.expense
    )
}

//! Diff generation for audit logging
//!
//! Describes what an edit changed, field by field, in display form.

use crate::models::Record;

/// Longest description shown in a diff before truncation
const MAX_TEXT_CHARS: usize = 50;

/// Generate a human-readable diff between two versions of a record
///
/// Returns `None` when the edit changed nothing.
pub fn generate_diff(before: &Record, after: &Record) -> Option<String> {
    let mut changes = Vec::new();

    if before.date() != after.date() {
        changes.push(format!("date: {} -> {}", before.date_text(), after.date_text()));
    }
    if before.category() != after.category() {
        changes.push(format!("category: {} -> {}", before.category(), after.category()));
    }
    if before.amount() != after.amount() {
        changes.push(format!("amount: {} -> {}", before.amount(), after.amount()));
    }
    if before.description() != after.description() {
        changes.push(format!(
            "description: {} -> {}",
            format_text(before.description()),
            format_text(after.description())
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a text value, truncating long ones
fn format_text(s: &str) -> String {
    if s.chars().count() > MAX_TEXT_CHARS {
        let head: String = s.chars().take(MAX_TEXT_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}

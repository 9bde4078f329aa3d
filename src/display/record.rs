//! Record display formatting
//!
//! One record per line, `date - category - amount - description`, optionally
//! prefixed with its 1-based number for the edit picker.

use crate::models::Record;

/// Format a record with its 1-based number
pub fn format_numbered_row(number: usize, record: &Record) -> String {
    format!("{}. {}", number, record)
}

/// Format the whole ledger as a numbered list
pub fn format_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_numbered_row(i + 1, record));
        output.push('\n');
    }
    output
}

/// Format search hits
pub fn format_search_results(found: &[&Record]) -> String {
    if found.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = format!("Found {} record(s):\n", found.len());
    for record in found {
        output.push_str(&record.to_string());
        output.push('\n');
    }
    output
}

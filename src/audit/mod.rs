//! Audit logging for the wallet
//!
//! Records every add and edit, with before/after values, in an append-only
//! audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, record number and
//!   optional before/after values.
//! - `AuditLog`: appends entries to the audit log file as JSON lines and reads
//!   them back.
//! - `generate_diff`: field-by-field summary of an edit.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet::audit::{generate_diff, AuditEntry, AuditLog};
//!
//! let log = AuditLog::new(audit_log_path);
//! let entry = AuditEntry::update(3, None, &before, &after, generate_diff(&before, &after));
//! log.append(&entry)?;
//! ```

mod diff;
mod entry;
mod log;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use log::AuditLog;

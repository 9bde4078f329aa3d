//! Storage layer for the wallet
//!
//! Flat-file ledger storage with atomic writes, plus the audit trail that
//! follows every mutation.

pub mod file_io;
pub mod records;

pub use file_io::{read_if_exists, write_atomic};
pub use records::{LoadStatus, LoadedLedger, RecordRepository};

use tracing::warn;

use crate::audit::{generate_diff, AuditEntry, AuditLog};
use crate::config::{paths::WalletPaths, settings::Settings};
use crate::error::WalletError;
use crate::models::Record;

/// Main storage coordinator
pub struct Storage {
    paths: WalletPaths,
    pub records: RecordRepository,
    audit: Option<AuditLog>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: WalletPaths, settings: &Settings) -> Result<Self, WalletError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordRepository::new(paths.records_file()),
            audit: settings
                .audit_enabled
                .then(|| AuditLog::new(paths.audit_log())),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &WalletPaths {
        &self.paths
    }

    /// Reader for the audit log, whether or not new entries are being written
    pub fn audit_log(&self) -> AuditLog {
        AuditLog::new(self.paths.audit_log())
    }

    /// Record an appended record. `index` is zero-based.
    pub fn log_create(&self, index: usize, record: &Record) {
        let entry = AuditEntry::create(index + 1, Some(summary(record)), record);
        self.write_audit(&entry);
    }

    /// Record a replaced record. `index` is zero-based.
    pub fn log_update(&self, index: usize, before: &Record, after: &Record) {
        let entry = AuditEntry::update(
            index + 1,
            Some(summary(after)),
            before,
            after,
            generate_diff(before, after),
        );
        self.write_audit(&entry);
    }

    // Runs after the ledger is saved; failures are logged, never returned.
    fn write_audit(&self, entry: &AuditEntry) {
        if let Some(log) = &self.audit {
            if let Err(e) = log.append(entry) {
                warn!(error = %e, "audit entry not written");
            }
        }
    }
}

fn summary(record: &Record) -> String {
    format!(
        "{} {} {}",
        record.date_text(),
        record.category(),
        record.amount()
    )
}

//! The audit log file
//!
//! One JSON object per line, appended after each saved mutation. A log that
//! was never written reads as empty, the same way a missing ledger does.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::entry::AuditEntry;
use crate::error::{WalletError, WalletResult};
use crate::storage::file_io::read_if_exists;

/// Append-only JSONL audit log
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line
    pub fn append(&self, entry: &AuditEntry) -> WalletResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| WalletError::Io(format!("{}: {}", self.path.display(), e)))
    }

    /// Every entry, oldest first
    pub fn entries(&self) -> WalletResult<Vec<AuditEntry>> {
        let Some(bytes) = read_if_exists(&self.path)? else {
            return Ok(Vec::new());
        };

        serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<AuditEntry>()
            .collect::<Result<_, _>>()
            .map_err(|e| WalletError::Json(format!("{}: {}", self.path.display(), e)))
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> WalletResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_log() -> (TempDir, AuditLog) {
        let temp_dir = TempDir::new().unwrap();
        let log = AuditLog::new(temp_dir.path().join("audit.log"));
        (temp_dir, log)
    }

    #[test]
    fn test_append_and_read() {
        let (_temp, log) = create_test_log();
        let entry = AuditEntry::create(1, Some("salary".into()), &json!({"amount": 10000}));

        log.append(&entry).unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].record_number, 1);

        let text = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_recent_keeps_order() {
        let (_temp, log) = create_test_log();

        for i in 1..=10 {
            log.append(&AuditEntry::create(i, None, &json!({"index": i})))
                .unwrap();
        }

        let numbers: Vec<_> = log.recent(3).unwrap().iter().map(|e| e.record_number).collect();
        assert_eq!(numbers, vec![8, 9, 10]);

        assert_eq!(log.recent(50).unwrap().len(), 10);
        assert!(log.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_never_written_reads_empty() {
        let (_temp, log) = create_test_log();

        assert!(log.entries().unwrap().is_empty());
        assert!(!log.path().exists());
    }

    #[test]
    fn test_appends_across_handles() {
        let (temp, log) = create_test_log();
        log.append(&AuditEntry::create(1, None, &json!({}))).unwrap();

        let other = AuditLog::new(temp.path().join("audit.log"));
        other
            .append(&AuditEntry::update(1, None, &json!({"a": 1}), &json!({"a": 2}), None))
            .unwrap();

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
    }

    #[test]
    fn test_garbage_is_json_error() {
        let (_temp, log) = create_test_log();
        std::fs::write(log.path(), "{not json}\n").unwrap();

        let err = log.entries().unwrap_err();
        assert!(matches!(err, WalletError::Json(_)));
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let (temp, _log) = create_test_log();
        let log = AuditLog::new(temp.path().to_path_buf());

        let err = log.append(&AuditEntry::create(1, None, &json!({}))).unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
    }
}

//! Path management for the wallet
//!
//! Everything lives in one data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `WALLET_DATA_DIR` environment variable (if set)
//! 2. The current working directory, so the ledger is `./records.txt`

use std::path::PathBuf;

use crate::error::WalletError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "WALLET_DATA_DIR";

/// Manages all paths used by the wallet
#[derive(Debug, Clone)]
pub struct WalletPaths {
    /// Directory holding the ledger, audit log and settings
    base_dir: PathBuf,
}

impl WalletPaths {
    /// Create a new WalletPaths instance
    ///
    /// Uses `WALLET_DATA_DIR` if set, the current directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, WalletError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                WalletError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create WalletPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the data directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger file
    pub fn records_file(&self) -> PathBuf {
        self.base_dir.join("records.txt")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("wallet.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.records_file(), temp_dir.path().join("records.txt"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("wallet.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("wallet");
        let paths = WalletPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}

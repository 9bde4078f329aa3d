//! Ledger service
//!
//! The four operations the console and CLI are built on: add, edit, search,
//! balance. Every successful mutation rewrites the whole ledger file; a
//! failed one leaves both memory and disk as they were.

use tracing::info;

use crate::error::WalletResult;
use crate::models::{Balance, Ledger, Record, RecordEdit, SearchCriterion};
use crate::storage::{LoadStatus, Storage};

/// Service owning the in-memory ledger for a session
pub struct LedgerService<'a> {
    storage: &'a Storage,
    ledger: Ledger,
    load_status: LoadStatus,
}

impl<'a> LedgerService<'a> {
    /// Load the ledger from storage
    pub fn open(storage: &'a Storage) -> WalletResult<Self> {
        let loaded = storage.records.load()?;

        Ok(Self {
            storage,
            ledger: loaded.ledger,
            load_status: loaded.status,
        })
    }

    /// Whether the ledger file existed when the session started
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// The current ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate raw input, append a record and save
    pub fn add_record(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> WalletResult<Record> {
        let record = Record::parse(date, category, amount, description)?;

        let mut next = self.ledger.clone();
        next.push(record.clone());
        self.storage.records.save(&next)?;
        self.ledger = next;

        let index = self.ledger.len() - 1;
        self.storage.log_create(index, &record);
        info!(number = index + 1, "record added");

        Ok(record)
    }

    /// Replace the record at a zero-based index with an edited copy and save
    ///
    /// Empty or absent fields in `edit` keep their current values.
    pub fn edit_record(&mut self, index: usize, edit: &RecordEdit) -> WalletResult<Record> {
        let updated = self.ledger.get(index)?.edited(edit)?;

        let mut next = self.ledger.clone();
        let before = next.replace(index, updated.clone())?;
        self.storage.records.save(&next)?;
        self.ledger = next;

        self.storage.log_update(index, &before, &updated);
        info!(number = index + 1, "record updated");

        Ok(updated)
    }

    /// Income, expense and their difference
    pub fn balance(&self) -> WalletResult<Balance> {
        self.ledger.balance()
    }

    /// Records matching a criterion, in ledger order
    pub fn search(&self, criterion: SearchCriterion) -> Vec<&Record> {
        self.ledger.search(criterion).collect()
    }
}

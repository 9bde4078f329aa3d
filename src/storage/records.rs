//! Record repository for the flat ledger file
//!
//! One record per line: `DD.MM.YYYY,Category,Amount,Description`, no header.
//! Fields are quoted only when they have to be, so a file without commas or
//! quotes in its descriptions is plain comma-separated text.

use std::path::PathBuf;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{WalletError, WalletResult};
use crate::models::{Category, Ledger, Record};
use crate::validation;

use super::file_io::{read_if_exists, write_atomic};

/// Number of fields on every ledger line
const FIELD_COUNT: usize = 4;

/// Whether the ledger file was found on load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and was parsed
    Loaded,
    /// No file yet; the ledger starts empty
    Missing,
}

/// A ledger read from disk
#[derive(Debug, Clone)]
pub struct LoadedLedger {
    pub ledger: Ledger,
    pub status: LoadStatus,
}

/// Repository for ledger persistence
#[derive(Debug, Clone)]
pub struct RecordRepository {
    path: PathBuf,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the ledger. A missing file is an empty ledger, not an error.
    pub fn load(&self) -> WalletResult<LoadedLedger> {
        let Some(bytes) = read_if_exists(&self.path)? else {
            debug!(path = %self.path.display(), "ledger file missing, starting empty");
            return Ok(LoadedLedger {
                ledger: Ledger::new(),
                status: LoadStatus::Missing,
            });
        };

        let ledger = decode(&bytes)?;
        debug!(path = %self.path.display(), records = ledger.len(), "ledger loaded");

        Ok(LoadedLedger {
            ledger,
            status: LoadStatus::Loaded,
        })
    }

    /// Overwrite the ledger file with every record
    pub fn save(&self, ledger: &Ledger) -> WalletResult<()> {
        let bytes = encode(ledger)?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), records = ledger.len(), "ledger saved");
        Ok(())
    }
}

/// Serialize a ledger to the file format
pub fn encode(ledger: &Ledger) -> WalletResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in ledger.records() {
        writer
            .write_record([
                record.date_text().as_str(),
                record.category().label(),
                record.amount().to_string().as_str(),
                record.description(),
            ])
            .map_err(|e| WalletError::Io(format!("Failed to encode record: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| WalletError::Io(format!("Failed to encode ledger: {}", e)))
}

/// Parse the file format into a ledger
pub fn decode(bytes: &[u8]) -> WalletResult<Ledger> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
            WalletError::corrupt(line, e.to_string())
        })?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
        records.push(parse_row(&row, line)?);
    }

    Ok(Ledger::from_records(records))
}

/// Build a record from one parsed line
fn parse_row(row: &StringRecord, line: usize) -> WalletResult<Record> {
    if row.len() != FIELD_COUNT {
        return Err(WalletError::corrupt(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
        ));
    }

    let corrupt = |e: WalletError| WalletError::corrupt(line, e.to_string());

    let date = validation::parse_date(&row[0]).map_err(corrupt)?;
    let category = Category::from_label_ignore_case(&row[1])
        .ok_or_else(|| WalletError::corrupt(line, format!("unknown category '{}'", &row[1])))?;
    let amount = validation::parse_amount(&row[2]).map_err(corrupt)?;

    Record::new(date, category, amount, &row[3]).map_err(corrupt)
}

//! Wallet - a personal income and expense ledger for the terminal
//!
//! Records (date, category, amount, description) live in an ordered
//! in-memory ledger backed by a flat `records.txt` file that is rewritten
//! on every change. The binary offers a numbered interactive menu and
//! one-shot subcommands over the same service.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory paths and user settings
//! - `error`: Custom error types
//! - `validation`: Single-shot checks and parsers for raw field input
//! - `models`: Money, categories, records and the ledger
//! - `storage`: Flat-file ledger persistence with atomic writes
//! - `audit`: Append-only audit log of adds and edits
//! - `services`: The add, edit, search and balance operations
//! - `display`: Text formatting and colours
//! - `console`: The interactive menu
//! - `cli`: Subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet::config::{Settings, WalletPaths};
//! use wallet::services::LedgerService;
//! use wallet::storage::Storage;
//!
//! let paths = WalletPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let mut service = LedgerService::open(&storage)?;
//! service.add_record("01.01.2024", "Доход", "100", "salary")?;
//! println!("{}", service.balance()?.balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::WalletError;

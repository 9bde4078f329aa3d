//! Service layer for the wallet
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence of every change.

pub mod ledger;

pub use ledger::LedgerService;

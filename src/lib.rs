//! MoneyTrunk - Command-line personal finance tracker
//!
//! This library provides the core functionality for MoneyTrunk: bills,
//! subscriptions, income sources, expenses (including recurring templates),
//! savings goals, personal loans in both directions, and net-worth tracking.
//! All state lives in one JSON document that is rewritten atomically on every
//! mutation, so there is exactly one writer and no partial updates on disk.
//!
//! # Architecture
//!
//! - `config`: data-directory and path resolution
//! - `error`: custom error types
//! - `models`: core data records (bills, expenses, loans, settings, ...)
//! - `storage`: the persisted `AppData` aggregate and its `Store` wrapper
//! - `services`: domain logic (recurring engine, loan ledger, alerts, import)
//! - `reports`: read-only aggregations (spending, summaries, year-over-year)
//! - `export`: JSON backup and CSV export formats
//! - `crypto`: PIN digest
//! - `backup`: timestamped copies of the data file
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moneytrunk::config::paths::TrunkPaths;
//! use moneytrunk::storage::Store;
//!
//! let paths = TrunkPaths::new()?;
//! let mut store = Store::open(&paths)?;
//! let generated = store.process_recurring(chrono::Local::now().date_naive())?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrunkError, TrunkResult};

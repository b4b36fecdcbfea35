//! A personal income and expense ledger persisted to a single durable slot.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod operations;
pub mod store;

pub use error::{LedgerError, Result};
pub use store::LedgerStore;

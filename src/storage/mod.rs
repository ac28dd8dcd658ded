//! Storage layer for SmartSpend
//!
//! The [`Persistence`] trait is the load/save boundary the session talks to.
//! Loads never fail: missing or corrupt data yields a default. Saves report
//! errors, and the caller decides what a failed save means.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonStorage;
pub use memory::MemoryStorage;

use crate::error::SpendResult;
use crate::models::{Money, Transaction};

/// Load/save boundary for everything that outlives a session
pub trait Persistence {
    /// Stored transactions in ledger order, or empty
    fn load_transactions(&self) -> Vec<Transaction>;
    fn save_transactions(&self, transactions: &[Transaction]) -> SpendResult<()>;

    /// Stored balance offset, or zero
    fn load_initial_balance(&self) -> Money;
    fn save_initial_balance(&self, offset: Money) -> SpendResult<()>;

    /// Dark theme flag, or false
    fn load_theme(&self) -> bool;
    fn save_theme(&self, dark: bool) -> SpendResult<()>;

    /// Display currency symbol, or `$`
    fn load_currency_symbol(&self) -> String;
    fn save_currency_symbol(&self, symbol: &str) -> SpendResult<()>;

    /// Remove everything this store holds
    fn clear_all(&self) -> SpendResult<()>;
}

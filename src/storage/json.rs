//! JSON file persistence
//!
//! Transactions and the balance offset live under `data/`, display settings
//! in `config.json`. Unreadable files are moved aside and treated as empty.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::paths::SpendPaths;
use crate::config::settings::Settings;
use crate::error::SpendResult;
use crate::models::{Money, Transaction};

use super::file_io::{preserve_copy, quarantine, read_json, remove_if_exists, write_json_atomic};
use super::Persistence;

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Transactions file as read back, one undecoded value per row
#[derive(Debug, Default, Deserialize)]
struct StoredTransactions {
    #[serde(default)]
    transactions: Vec<serde_json::Value>,
}

/// Serializable balance offset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BalanceData {
    /// Signed offset in cents
    initial_balance: Money,
}

/// File-backed [`Persistence`] rooted at a [`SpendPaths`] directory
#[derive(Debug, Clone)]
pub struct JsonStorage {
    paths: SpendPaths,
}

impl JsonStorage {
    /// Create storage, making sure the directories exist
    pub fn new(paths: SpendPaths) -> SpendResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    fn load_or_default<T>(&self, path: &Path) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match read_json(path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "unreadable data file, using defaults");
                match quarantine(path) {
                    Ok(moved) => {
                        tracing::warn!(moved_to = %moved.display(), "unreadable file moved aside")
                    }
                    Err(err) => tracing::warn!(%err, "could not move unreadable file aside"),
                }
                T::default()
            }
        }
    }

    fn settings(&self) -> Settings {
        self.load_or_default(&self.paths.settings_file())
    }

    fn update_settings(&self, change: impl FnOnce(&mut Settings)) -> SpendResult<()> {
        let mut settings = self.settings();
        change(&mut settings);
        write_json_atomic(self.paths.settings_file(), &settings)
    }
}

impl Persistence for JsonStorage {
    /// Rows that fail to decode are skipped; the file is then copied aside
    /// before any save can drop them.
    fn load_transactions(&self) -> Vec<Transaction> {
        let path = self.paths.transactions_file();
        let stored: StoredTransactions = self.load_or_default(&path);

        let mut transactions = Vec::with_capacity(stored.transactions.len());
        let mut skipped = 0usize;
        for (index, raw) in stored.transactions.into_iter().enumerate() {
            match serde_json::from_value::<Transaction>(raw) {
                Ok(txn) => transactions.push(txn),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping undecodable transaction");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            match preserve_copy(&path) {
                Ok(copy) => tracing::warn!(skipped, copy = %copy.display(), "original file kept"),
                Err(err) => tracing::warn!(%err, "could not copy partly readable file aside"),
            }
        }
        transactions
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> SpendResult<()> {
        let data = TransactionData {
            transactions: transactions.to_vec(),
        };
        write_json_atomic(self.paths.transactions_file(), &data)
    }

    fn load_initial_balance(&self) -> Money {
        self.load_or_default::<BalanceData>(&self.paths.balance_file())
            .initial_balance
    }

    fn save_initial_balance(&self, offset: Money) -> SpendResult<()> {
        write_json_atomic(
            self.paths.balance_file(),
            &BalanceData {
                initial_balance: offset,
            },
        )
    }

    fn load_theme(&self) -> bool {
        self.settings().dark_theme
    }

    fn save_theme(&self, dark: bool) -> SpendResult<()> {
        self.update_settings(|s| s.dark_theme = dark)
    }

    fn load_currency_symbol(&self) -> String {
        self.settings().currency_symbol
    }

    fn save_currency_symbol(&self, symbol: &str) -> SpendResult<()> {
        self.update_settings(|s| s.currency_symbol = symbol.to_string())
    }

    fn clear_all(&self) -> SpendResult<()> {
        remove_if_exists(self.paths.transactions_file())?;
        remove_if_exists(self.paths.balance_file())?;
        remove_if_exists(self.paths.settings_file())?;
        Ok(())
    }
}

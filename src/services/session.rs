//! Session context
//!
//! A session owns the ledger and the display preferences for one run of the
//! program. Everything is loaded once from a [`Persistence`] store; every
//! mutation updates memory first and then writes through. A failed write is
//! logged and never undoes the in-memory change.

use crate::config::settings::{default_currency, toggled_symbol};
use crate::error::{SpendError, SpendResult};
use crate::models::{Ledger, NewTransaction, Transaction, TransactionId};
use crate::storage::Persistence;

use super::balance::{reconcile_to_target, Reconciliation, Totals};

/// Ledger plus display preferences, backed by a store
#[derive(Debug)]
pub struct Session<P: Persistence> {
    store: P,
    ledger: Ledger,
    currency_symbol: String,
    dark_theme: bool,
}

impl<P: Persistence> Session<P> {
    /// Load everything from the store
    pub fn load(store: P) -> Self {
        let ledger = Ledger::from_parts(store.load_transactions(), store.load_initial_balance());
        let currency_symbol = store.load_currency_symbol();
        let dark_theme = store.load_theme();

        let session = Self {
            store,
            ledger,
            currency_symbol,
            dark_theme,
        };
        for err in session.corrupt_records() {
            tracing::warn!(%err, "record will count as zero in totals");
        }
        tracing::debug!(
            transactions = session.ledger.len(),
            offset = %session.ledger.initial_balance_offset(),
            "session loaded"
        );
        session
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Every transaction, newest first
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.list()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Totals over the current ledger
    pub fn totals(&self) -> Totals {
        Totals::of(&self.ledger)
    }

    /// Stored transactions whose amount is not numeric
    pub fn corrupt_records(&self) -> Vec<SpendError> {
        self.ledger
            .list()
            .iter()
            .filter_map(|t| t.checked_value().err())
            .collect()
    }

    /// Record a validated transaction
    pub fn add_transaction(&mut self, input: NewTransaction) -> Transaction {
        let txn = self.ledger.add(input);
        self.persist_transactions();
        txn
    }

    /// Delete a transaction; deleting an unknown id does nothing
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let removed = self.ledger.remove(id);
        if removed {
            self.persist_transactions();
        }
        removed
    }

    /// Solve for the offset that makes the balance equal `target_balance`
    pub fn reconcile_to_target(&mut self, target_balance: f64) -> SpendResult<Reconciliation> {
        let result = reconcile_to_target(&mut self.ledger, target_balance)?;
        self.persist_offset();
        Ok(result)
    }

    /// Change the display currency symbol
    pub fn set_currency_symbol(&mut self, symbol: &str) -> SpendResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(SpendError::InvalidInput(
                "currency symbol must not be empty".into(),
            ));
        }
        self.currency_symbol = symbol.to_string();
        best_effort("currency", self.store.save_currency_symbol(symbol));
        Ok(())
    }

    /// Swap between `$` and `₹`; returns the new symbol
    pub fn toggle_currency(&mut self) -> &str {
        let next = toggled_symbol(&self.currency_symbol);
        self.currency_symbol = next.to_string();
        best_effort("currency", self.store.save_currency_symbol(next));
        &self.currency_symbol
    }

    pub fn set_dark_theme(&mut self, dark: bool) {
        self.dark_theme = dark;
        best_effort("theme", self.store.save_theme(dark));
    }

    /// Wipe all transactions, the offset and preferences
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.currency_symbol = default_currency();
        self.dark_theme = false;
        best_effort("reset", self.store.clear_all());
        tracing::info!("all data cleared");
    }

    fn persist_transactions(&self) {
        best_effort(
            "transactions",
            self.store.save_transactions(self.ledger.list()),
        );
    }

    fn persist_offset(&self) {
        best_effort(
            "balance offset",
            self.store
                .save_initial_balance(self.ledger.initial_balance_offset()),
        );
    }
}

fn best_effort(what: &str, result: SpendResult<()>) {
    if let Err(err) = result {
        tracing::warn!(%err, what, "save failed, change kept in memory only");
    }
}

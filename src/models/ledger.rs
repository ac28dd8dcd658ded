//! In-memory ledger
//!
//! The ledger is the ordered transaction sequence (newest first) plus the
//! signed initial-balance offset. It never rejects input and never persists;
//! see [`crate::services::Session`] for validation and write-through.

use super::ids::TransactionId;
use super::money::Money;
use super::transaction::{NewTransaction, Transaction};

/// Transactions in insertion order (newest first) and the balance offset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    initial_balance_offset: Money,
}

impl Ledger {
    /// Create an empty ledger with a zero offset
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted state
    pub fn from_parts(transactions: Vec<Transaction>, initial_balance_offset: Money) -> Self {
        Self {
            transactions,
            initial_balance_offset,
        }
    }

    /// Record a transaction under a fresh id and put it at the front
    pub fn add(&mut self, input: NewTransaction) -> Transaction {
        let txn = Transaction::create(input);
        tracing::debug!(id = %txn.id, "transaction added");
        self.transactions.insert(0, txn.clone());
        txn
    }

    /// Remove a transaction; returns whether anything was removed
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            tracing::debug!(%id, "transaction removed");
        }
        removed
    }

    /// Every transaction, newest first
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Empty the ledger and reset the offset to zero
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.initial_balance_offset = Money::zero();
    }

    pub fn initial_balance_offset(&self) -> Money {
        self.initial_balance_offset
    }

    pub fn set_initial_balance_offset(&mut self, offset: Money) {
        self.initial_balance_offset = offset;
    }

    /// Look up a transaction by full id, short display id or id prefix
    ///
    /// Returns `None` when nothing or more than one transaction matches.
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(identifier));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

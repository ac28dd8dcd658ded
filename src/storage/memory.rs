//! In-memory persistence
//!
//! Used by tests and by callers that do not want anything on disk. Saves can
//! be made to fail on demand.

use std::cell::{Cell, RefCell};

use crate::config::settings::default_currency;
use crate::error::{SpendError, SpendResult};
use crate::models::{Money, Transaction};

use super::Persistence;

#[derive(Debug, Clone)]
struct MemoryState {
    transactions: Vec<Transaction>,
    initial_balance: Money,
    dark_theme: bool,
    currency_symbol: String,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            initial_balance: Money::zero(),
            dark_theme: false,
            currency_symbol: default_currency(),
        }
    }
}

/// Single-threaded in-memory [`Persistence`]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: RefCell<MemoryState>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with transactions and an offset
    pub fn with_data(transactions: Vec<Transaction>, initial_balance: Money) -> Self {
        let storage = Self::new();
        {
            let mut state = storage.state.borrow_mut();
            state.transactions = transactions;
            state.initial_balance = initial_balance;
        }
        storage
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// What was last saved
    pub fn saved_transactions(&self) -> Vec<Transaction> {
        self.state.borrow().transactions.clone()
    }

    fn check_writable(&self) -> SpendResult<()> {
        if self.fail_saves.get() {
            return Err(SpendError::Storage("simulated write failure".into()));
        }
        Ok(())
    }
}

impl Persistence for MemoryStorage {
    fn load_transactions(&self) -> Vec<Transaction> {
        self.state.borrow().transactions.clone()
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> SpendResult<()> {
        self.check_writable()?;
        self.state.borrow_mut().transactions = transactions.to_vec();
        Ok(())
    }

    fn load_initial_balance(&self) -> Money {
        self.state.borrow().initial_balance
    }

    fn save_initial_balance(&self, offset: Money) -> SpendResult<()> {
        self.check_writable()?;
        self.state.borrow_mut().initial_balance = offset;
        Ok(())
    }

    fn load_theme(&self) -> bool {
        self.state.borrow().dark_theme
    }

    fn save_theme(&self, dark: bool) -> SpendResult<()> {
        self.check_writable()?;
        self.state.borrow_mut().dark_theme = dark;
        Ok(())
    }

    fn load_currency_symbol(&self) -> String {
        self.state.borrow().currency_symbol.clone()
    }

    fn save_currency_symbol(&self, symbol: &str) -> SpendResult<()> {
        self.check_writable()?;
        self.state.borrow_mut().currency_symbol = symbol.to_string();
        Ok(())
    }

    fn clear_all(&self) -> SpendResult<()> {
        self.check_writable()?;
        *self.state.borrow_mut() = MemoryState::default();
        Ok(())
    }
}

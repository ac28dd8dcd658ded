//! Core data models for SmartSpend
//!
//! Transactions, their amounts and categories, and the in-memory ledger.

pub mod amount;
pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use amount::Amount;
pub use category::{Category, TransactionType, UnknownCategory};
pub use ids::TransactionId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use transaction::{NewTransaction, Transaction, DATE_FORMAT};

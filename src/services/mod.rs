//! Service layer for SmartSpend
//!
//! Business logic on top of the ledger and storage: balance reconciliation,
//! filtering, entry validation and the write-through session.

pub mod balance;
pub mod entry;
pub mod filter;
pub mod session;

pub use balance::{parse_target_balance, reconcile_to_target, Reconciliation, Totals};
pub use entry::{validate_new, TransactionDraft};
pub use filter::{SortKey, TransactionFilter};
pub use session::Session;

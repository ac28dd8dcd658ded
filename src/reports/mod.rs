//! Reports module for SmartSpend
//!
//! Read-only aggregations over the ledger: expense breakdown by category,
//! the Sunday-to-Saturday weekly series, and the plain-text snapshot handed
//! to the chat assistant.

pub mod category_breakdown;
pub mod snapshot;
pub mod weekly;

pub use category_breakdown::{category_breakdown, top_expense_categories, CategoryTotal};
pub use snapshot::{context_snapshot, most_recent};
pub use weekly::{week_start, weekly_series, DayBucket};

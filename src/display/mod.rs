//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger and reports for terminal
//! display, including tables and simple bar charts.

pub mod report;
pub mod transaction;

pub use report::{
    format_breakdown, format_insights, format_reconciliation, format_totals, format_week,
};
pub use transaction::{
    format_signed_amount, format_transaction_details, format_transaction_register,
    format_transaction_short,
};

//! Export module for SmartSpend
//!
//! Serializes a transaction view to spreadsheet-friendly CSV.

pub mod csv;

pub use self::csv::{export_file_name, export_view, to_delimited_text, write_transactions_csv};

//! CSV export of transactions
//!
//! Output is UTF-8 with a leading byte-order mark so spreadsheet tools pick
//! the right encoding. Every text field is quoted; the amount is not.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{SpendError, SpendResult};
use crate::models::{Transaction, DATE_FORMAT};

/// UTF-8 byte-order mark
pub const BOM: &str = "\u{FEFF}";

/// Header row of every export
pub const HEADER: &str = "Date,Description,Category,Type,Amount,Currency";

/// Write `transactions` as CSV, BOM and header included
///
/// Fails with `NothingToExport` on an empty slice rather than writing a
/// header-only file.
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    currency_symbol: &str,
    writer: &mut W,
) -> SpendResult<()> {
    if transactions.is_empty() {
        return Err(SpendError::NothingToExport);
    }

    writeln!(writer, "{}{}", BOM, HEADER).map_err(|e| SpendError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            quote(&txn.date),
            quote(&txn.description),
            quote(txn.category.as_str()),
            quote(txn.kind.as_str()),
            txn.value(),
            quote(currency_symbol)
        )
        .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Render `transactions` as CSV text
pub fn to_delimited_text(transactions: &[Transaction], currency_symbol: &str) -> SpendResult<String> {
    let mut buffer = Vec::new();
    write_transactions_csv(transactions, currency_symbol, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| SpendError::Export(e.to_string()))
}

/// Pick the set to export: the filtered view, or the whole ledger when the
/// view is empty
pub fn export_view<'a>(
    filtered: &'a [Transaction],
    full: &'a [Transaction],
) -> SpendResult<&'a [Transaction]> {
    if !filtered.is_empty() {
        Ok(filtered)
    } else if !full.is_empty() {
        tracing::debug!("filtered view is empty, exporting the full ledger");
        Ok(full)
    } else {
        Err(SpendError::NothingToExport)
    }
}

/// Default export file name for a given day
pub fn export_file_name(day: NaiveDate) -> String {
    format!("smartspend_export_{}.csv", day.format(DATE_FORMAT))
}

/// Wrap a field in double quotes, doubling any embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

//! Transaction display formatting
//!
//! Register tables and one-line summaries for the ledger.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

/// Description column width in the register
const DESCRIPTION_WIDTH: usize = 28;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.short(),
            date: txn.date.clone(),
            description: truncate(&txn.description, DESCRIPTION_WIDTH),
            category: txn.category.to_string(),
            amount: format_signed_amount(txn, symbol),
        }
    }
}

/// `+$12.00` for income, `-$12.00` for expense; corrupt amounts are flagged
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    match txn.checked_value() {
        Ok(value) => format!("{}{}", sign, value.format_with_symbol(symbol)),
        Err(_) => format!("{}{} (corrupt: {})", sign, txn.value().format_with_symbol(symbol), txn.amount),
    }
}

/// Format transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|t| RegisterRow::new(t, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {} {} {}",
        txn.id.short(),
        txn.date,
        truncate(&txn.description, DESCRIPTION_WIDTH).trim_end(),
        format_signed_amount(txn, symbol)
    )
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

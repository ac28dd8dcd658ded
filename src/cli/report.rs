//! CLI commands for balance summaries and spending analytics

use chrono::NaiveDate;

use crate::assistant::{chat_reply, insights_or_placeholder, Assistant, ChatHistory};
use crate::display::{
    format_breakdown, format_insights, format_totals, format_transaction_short, format_week,
};
use crate::error::SpendResult;
use crate::reports::{category_breakdown, context_snapshot, weekly_series};
use crate::services::Session;
use crate::storage::Persistence;

/// Transactions shown under the summary
pub const RECENT_ON_SUMMARY: usize = 5;

/// Handle `summary`: balance, totals and the latest entries
pub fn handle_summary_command<P: Persistence>(session: &Session<P>) -> SpendResult<()> {
    let symbol = session.currency_symbol();
    print!("{}", format_totals(&session.totals(), symbol));

    let transactions = session.transactions();
    if transactions.is_empty() {
        println!();
        println!("No transactions yet. Add one with 'smartspend add <amount> <description>'.");
        return Ok(());
    }

    println!();
    println!("Recent transactions:");
    for txn in transactions.iter().take(RECENT_ON_SUMMARY) {
        println!("  {}", format_transaction_short(txn, symbol));
    }

    let corrupt = session.corrupt_records();
    if !corrupt.is_empty() {
        println!();
        println!(
            "Warning: {} transaction(s) have unreadable amounts and count as zero",
            corrupt.len()
        );
    }
    Ok(())
}

/// Handle `breakdown`
pub fn handle_breakdown_command<P: Persistence>(session: &Session<P>) -> SpendResult<()> {
    let breakdown = category_breakdown(session.transactions());
    print!("{}", format_breakdown(&breakdown, session.currency_symbol()));
    Ok(())
}

/// Handle `week`
pub fn handle_week_command<P: Persistence>(
    session: &Session<P>,
    reference: NaiveDate,
) -> SpendResult<()> {
    let days = weekly_series(session.transactions(), reference);
    print!("{}", format_week(&days, session.currency_symbol()));
    Ok(())
}

/// Handle `insights`
pub fn handle_insights_command<P: Persistence>(
    session: &Session<P>,
    assistant: &dyn Assistant,
) -> SpendResult<()> {
    let insights = insights_or_placeholder(
        assistant,
        session.transactions(),
        session.currency_symbol(),
    );
    print!("{}", format_insights(&insights));
    Ok(())
}

/// Handle `chat <message>`: one question answered against a fresh snapshot
pub fn handle_chat_command<P: Persistence>(
    session: &Session<P>,
    assistant: &dyn Assistant,
    message: &str,
) -> SpendResult<()> {
    let context = context_snapshot(
        session.transactions(),
        session.ledger().initial_balance_offset(),
        session.currency_symbol(),
    );
    let mut history = ChatHistory::new();

    match chat_reply(assistant, &context, &mut history, message) {
        Some(reply) => println!("{}", reply),
        None => println!("Nothing to send."),
    }
    Ok(())
}

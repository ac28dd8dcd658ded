//! Plain-text financial snapshot used as conversational context

use super::category_breakdown::top_expense_categories;
use crate::models::{Money, Transaction};
use crate::services::Totals;

/// Categories listed in the snapshot
pub const SNAPSHOT_TOP_CATEGORIES: usize = 5;

/// Transactions listed in the snapshot
pub const SNAPSHOT_RECENT: usize = 10;

/// The `limit` most recent transactions by date, newest first
///
/// Ties keep ledger order.
pub fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Summarize totals, top expense categories, and recent activity
pub fn context_snapshot(
    transactions: &[Transaction],
    initial_balance_offset: Money,
    symbol: &str,
) -> String {
    let totals = Totals::compute(transactions, initial_balance_offset);
    let mut output = String::new();

    output.push_str("FINANCIAL SUMMARY:\n");
    output.push_str(&format!("Total Balance: {}\n", totals.balance.format_with_symbol(symbol)));
    output.push_str(&format!("Total Income: {}\n", totals.income.format_with_symbol(symbol)));
    output.push_str(&format!("Total Expenses: {}\n", totals.expense.format_with_symbol(symbol)));

    output.push_str("\nTop Expense Categories:\n");
    for category in top_expense_categories(transactions, SNAPSHOT_TOP_CATEGORIES) {
        output.push_str(&format!(
            "- {}: {}\n",
            category.category,
            category.total.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!("\nRecent {} Transactions:\n", SNAPSHOT_RECENT));
    for txn in most_recent(transactions, SNAPSHOT_RECENT) {
        output.push_str(&format!(
            "{}: {} ({}) - {} [{}]\n",
            txn.date,
            txn.description,
            txn.kind,
            txn.value().format_with_symbol(symbol),
            txn.category
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Ledger, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        let entries = [
            (1, TransactionType::Income, Category::Salary, 300000, "Salary"),
            (2, TransactionType::Expense, Category::Housing, 120000, "Rent"),
            (3, TransactionType::Expense, Category::Food, 4550, "Groceries"),
        ];
        for (day, kind, category, cents, desc) in entries {
            ledger.add(NewTransaction {
                amount: Money::from_cents(cents),
                category,
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                description: desc.into(),
                kind,
            });
        }
        ledger
    }

    #[test]
    fn test_snapshot_contents() {
        let ledger = sample();
        let text = context_snapshot(ledger.list(), Money::from_cents(10000), "$");

        assert!(text.starts_with("FINANCIAL SUMMARY:\n"));
        assert!(text.contains("Total Balance: $1854.50"));
        assert!(text.contains("Total Income: $3000.00"));
        assert!(text.contains("Total Expenses: $1245.50"));
        assert!(text.contains("- Housing: $1200.00\n- Food: $45.50"));
        assert!(text.contains("2024-06-03: Groceries (expense) - $45.50 [Food]"));
    }

    #[test]
    fn test_recent_order_newest_first() {
        let ledger = sample();
        let recent = most_recent(ledger.list(), 2);
        let dates: Vec<&str> = recent.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-03", "2024-06-02"]);
    }

    #[test]
    fn test_exact_layout() {
        let mut ledger = Ledger::new();
        ledger.add(NewTransaction {
            amount: Money::from_cents(1999),
            category: Category::Entertainment,
            date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
            description: "Movie".into(),
            kind: TransactionType::Expense,
        });

        let expected = "FINANCIAL SUMMARY:\n\
                        Total Balance: -$19.99\n\
                        Total Income: $0.00\n\
                        Total Expenses: $19.99\n\
                        \n\
                        Top Expense Categories:\n\
                        - Entertainment: $19.99\n\
                        \n\
                        Recent 10 Transactions:\n\
                        2024-06-09: Movie (expense) - $19.99 [Entertainment]\n";
        assert_eq!(context_snapshot(ledger.list(), Money::zero(), "$"), expected);
    }

    #[test]
    fn test_empty_snapshot() {
        let text = context_snapshot(&[], Money::zero(), "₹");
        assert!(text.contains("Total Balance: ₹0.00"));
        assert!(text.contains("Recent 10 Transactions:"));
    }
}

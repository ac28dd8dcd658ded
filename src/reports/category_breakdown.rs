//! Expense breakdown by category
//!
//! Groups expense transactions by category with a per-category total and
//! the largest few entries for drill-down.

use crate::models::{Category, Money, Transaction};

/// Entries kept per category for drill-down
pub const TOP_ENTRIES: usize = 3;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Sum of expense amounts; corrupt amounts count as zero
    pub total: Money,
    /// Number of expense transactions in the category
    pub count: usize,
    /// Largest expenses, ties kept in ledger order
    pub top_entries: Vec<Transaction>,
}

impl CategoryTotal {
    /// Share of `overall` in percent, 0 when `overall` is zero
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_zero() {
            0.0
        } else {
            self.total.cents() as f64 / overall.cents() as f64 * 100.0
        }
    }
}

/// Per-category expense totals, in order of first appearance in the ledger
///
/// Categories without expense transactions are omitted; with no expenses at
/// all the result is empty.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: Vec<(Category, Vec<&Transaction>)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match groups.iter_mut().find(|(c, _)| *c == txn.category) {
            Some((_, members)) => members.push(txn),
            None => groups.push((txn.category, vec![txn])),
        }
    }

    groups
        .into_iter()
        .map(|(category, members)| CategoryTotal {
            category,
            total: members.iter().map(|t| t.value()).sum(),
            count: members.len(),
            top_entries: top_by_amount(&members, TOP_ENTRIES),
        })
        .collect()
}

/// The `limit` largest expense categories, largest first
pub fn top_expense_categories(transactions: &[Transaction], limit: usize) -> Vec<CategoryTotal> {
    let mut categories = category_breakdown(transactions);
    categories.sort_by(|a, b| b.total.cmp(&a.total));
    categories.truncate(limit);
    categories
}

/// Stable descending sort by amount, then the first `limit`
pub(crate) fn top_by_amount(members: &[&Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = members.to_vec();
    sorted.sort_by(|a, b| b.value().cmp(&a.value()));
    sorted.into_iter().take(limit).cloned().collect()
}

//! Filtering and sorting of transaction listings
//!
//! Read-only projections over the ledger, shared by the on-screen list and
//! the exporter.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Transaction, TransactionType, DATE_FORMAT};

/// Optional predicates; an unset field matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub category: Option<Category>,
    pub kind: Option<TransactionType>,
    /// Inclusive lower bound on the ISO date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the ISO date
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn date_from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    pub fn date_to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Whether no predicate is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check one transaction against every set predicate
    ///
    /// Date bounds compare the stored `YYYY-MM-DD` text, which orders the
    /// same way as the calendar.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.category.is_some_and(|c| c != txn.category) {
            return false;
        }
        if self.kind.is_some_and(|k| k != txn.kind) {
            return false;
        }
        if let Some(from) = self.date_from {
            if txn.date.as_str() < from.format(DATE_FORMAT).to_string().as_str() {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if txn.date.as_str() > to.format(DATE_FORMAT).to_string().as_str() {
                return false;
            }
        }
        true
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ledger order (newest entry first)
    #[default]
    Original,
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Original => "original",
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::AmountDesc => "amount-desc",
            SortKey::AmountAsc => "amount-asc",
        }
    }

    /// Parse a sort key; anything unrecognized keeps ledger order
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(key = s, "unknown sort key, keeping ledger order");
            SortKey::Original
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" | "none" => Ok(SortKey::Original),
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "amount-desc" => Ok(SortKey::AmountDesc),
            "amount-asc" => Ok(SortKey::AmountAsc),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Filter then stably sort; the input is never modified
pub fn apply(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    sort: SortKey,
) -> Vec<Transaction> {
    let mut view: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    match sort {
        SortKey::Original => {}
        SortKey::DateDesc => view.sort_by(|a, b| compare_dates(b, a)),
        SortKey::DateAsc => view.sort_by(compare_dates),
        SortKey::AmountDesc => view.sort_by(|a, b| b.value().cmp(&a.value())),
        SortKey::AmountAsc => view.sort_by(|a, b| a.value().cmp(&b.value())),
    }

    view
}

/// Calendar comparison; unparseable dates sort as the earliest
fn compare_dates(a: &Transaction, b: &Transaction) -> Ordering {
    a.parsed_date().cmp(&b.parsed_date())
}

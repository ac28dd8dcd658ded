//! Transaction model
//!
//! A transaction is immutable once created; the only way to change one is to
//! delete it and record a new one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::{Category, TransactionType};
use super::ids::TransactionId;
use super::money::Money;
use crate::error::{SpendError, SpendResult};

/// Storage format of [`Transaction::date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Non-negative magnitude; the sign comes from `kind`
    pub amount: Amount,

    pub category: Category,

    /// Calendar date as `YYYY-MM-DD`, so string order is chronological order
    pub date: String,

    pub description: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Everything needed to record a transaction except its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
    pub kind: TransactionType,
}

impl Transaction {
    /// Materialize a new transaction with a fresh id
    pub fn create(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            amount: Amount::Value(input.amount),
            category: input.category,
            date: input.date.format(DATE_FORMAT).to_string(),
            description: input.description,
            kind: input.kind,
        }
    }

    /// Numeric amount for arithmetic; corrupt amounts count as zero
    pub fn value(&self) -> Money {
        self.amount.coerce()
    }

    /// Numeric amount, or `CorruptRecord` if the stored amount is not numeric
    pub fn checked_value(&self) -> SpendResult<Money> {
        self.amount.parse().map_err(|_| SpendError::CorruptRecord {
            id: self.id.to_string(),
            raw: self.amount.to_string(),
        })
    }

    /// Amount with the type's sign applied (income positive, expense negative)
    pub fn signed_value(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.value(),
            TransactionType::Expense => -self.value(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Parsed calendar date, `None` if the stored text is not an ISO date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {}{} [{}]",
            self.date, self.description, sign, self.amount, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionType, cents: i64) -> Transaction {
        Transaction::create(NewTransaction {
            amount: Money::from_cents(cents),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            description: "Groceries".into(),
            kind,
        })
    }

    #[test]
    fn test_create_formats_iso_date() {
        let txn = sample(TransactionType::Expense, 20000);
        assert_eq!(txn.date, "2024-01-02");
        assert_eq!(txn.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(txn.value(), Money::from_cents(20000));
    }

    #[test]
    fn test_signed_value() {
        assert_eq!(
            sample(TransactionType::Expense, 500).signed_value().cents(),
            -500
        );
        assert_eq!(sample(TransactionType::Income, 500).signed_value().cents(), 500);
    }

    #[test]
    fn test_json_shape_uses_type_key() {
        let txn = sample(TransactionType::Income, 100000);
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["amount"], 1000.0);
        assert_eq!(json["date"], "2024-01-02");
    }

    #[test]
    fn test_loads_text_amount() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": "oops",
            "category": "Shopping",
            "date": "2024-03-01",
            "description": "Shoes",
            "type": "expense"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.value(), Money::zero());
        assert!(matches!(
            txn.checked_value(),
            Err(SpendError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_display() {
        let txn = sample(TransactionType::Expense, 1250);
        assert_eq!(format!("{}", txn), "2024-01-02 Groceries -12.50 [Food]");
    }
}

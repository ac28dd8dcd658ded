//! Transaction entry form state
//!
//! Holds what the user has typed so far, accepts partial receipt scans and
//! category suggestions, and validates on submit.

use chrono::NaiveDate;

use crate::assistant::ReceiptData;
use crate::error::{SpendError, SpendResult};
use crate::models::{Category, Money, NewTransaction, TransactionType, DATE_FORMAT};

/// In-progress transaction entry
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    /// Amount exactly as typed
    pub amount: String,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
}

impl TransactionDraft {
    /// Empty expense in the default category, dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            category: Category::default(),
            date: today,
            description: String::new(),
        }
    }

    /// Fill in whatever the receipt scan found; missing fields stay as they are
    ///
    /// A scanned receipt is always an expense.
    pub fn apply_receipt(&mut self, receipt: &ReceiptData) {
        if let Some(amount) = receipt.amount.as_ref().and_then(|a| a.parse().ok()) {
            self.amount = amount.to_string();
        }
        if let Some(date) = receipt
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT).ok())
        {
            self.date = date;
        }
        if let Some(merchant) = receipt.merchant.as_deref().filter(|m| !m.trim().is_empty()) {
            self.description = merchant.trim().to_string();
        }
        if let Some(category) = receipt.category.as_deref().and_then(|c| c.parse().ok()) {
            self.category = category;
        }
        self.kind = TransactionType::Expense;
    }

    /// Accept a suggested category if there is one
    pub fn apply_category_suggestion(&mut self, suggestion: Option<Category>) {
        if let Some(category) = suggestion {
            self.category = category;
        }
    }

    /// Validate and turn the draft into a ledger entry
    pub fn submit(&self) -> SpendResult<NewTransaction> {
        validate_new(
            &self.amount,
            self.category,
            self.date,
            &self.description,
            self.kind,
        )
    }
}

/// Caller-side validation for a new transaction
///
/// The description must be non-blank and the amount a non-negative number.
pub fn validate_new(
    amount: &str,
    category: Category,
    date: NaiveDate,
    description: &str,
    kind: TransactionType,
) -> SpendResult<NewTransaction> {
    let description = description.trim();
    if description.is_empty() {
        return Err(SpendError::InvalidInput("description is required".into()));
    }
    if amount.trim().is_empty() {
        return Err(SpendError::InvalidInput("amount is required".into()));
    }
    let amount = Money::parse(amount)
        .map_err(|e| SpendError::InvalidInput(format!("amount: {}", e)))?;
    if amount.is_negative() {
        return Err(SpendError::InvalidInput(
            "amount must not be negative; use the transaction type for direction".into(),
        ));
    }

    Ok(NewTransaction {
        amount,
        category,
        date,
        description: description.to_string(),
        kind,
    })
}

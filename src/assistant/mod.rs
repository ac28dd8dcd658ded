//! Optional AI collaborators
//!
//! Receipt parsing, categorization, spending insights and chat all sit behind
//! the [`Assistant`] trait. None of them is required: every call site goes
//! through a helper in this module that turns a failure into a neutral
//! placeholder, so ledger operations never wait on or fail because of them.

pub mod chat;

pub use chat::{chat_reply, ChatHistory, ChatMessage, ChatRole};

use serde::{Deserialize, Serialize};

use crate::error::{SpendError, SpendResult};
use crate::models::{Amount, Category, Transaction};

/// Transactions sent along with an insights request
pub const INSIGHT_SAMPLE_SIZE: usize = 50;

/// Fields recognized on a receipt; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
    /// Category name as guessed; ignored unless it names a known category
    #[serde(default)]
    pub category: Option<String>,
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Positive,
    #[default]
    Neutral,
}

/// One short observation about spending habits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub message: String,
    #[serde(alias = "type")]
    pub severity: Severity,
}

impl Insight {
    /// Shown whenever insights cannot be produced
    pub fn unavailable() -> Self {
        Self {
            title: "AI Unavailable".into(),
            message: "Could not generate insights at this time.".into(),
            severity: Severity::Neutral,
        }
    }
}

/// Backend for the optional AI features
pub trait Assistant {
    /// Extract receipt fields from image bytes
    fn parse_receipt(&self, image: &[u8]) -> SpendResult<ReceiptData>;

    /// Suggest a category name for a free-text description
    fn categorize(&self, description: &str) -> SpendResult<String>;

    /// Produce a few short insights about the given transactions
    fn insights(&self, transactions: &[Transaction], currency_symbol: &str)
        -> SpendResult<Vec<Insight>>;

    /// Answer `message` given a context snapshot and the conversation so far
    fn chat(&self, context: &str, history: &[ChatMessage], message: &str) -> SpendResult<String>;
}

/// Assistant used when no backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Unavailable {
    fn error() -> SpendError {
        SpendError::CollaboratorUnavailable("no assistant backend configured".into())
    }
}

impl Assistant for Unavailable {
    fn parse_receipt(&self, _image: &[u8]) -> SpendResult<ReceiptData> {
        Err(Self::error())
    }

    fn categorize(&self, _description: &str) -> SpendResult<String> {
        Err(Self::error())
    }

    fn insights(&self, _transactions: &[Transaction], _currency_symbol: &str) -> SpendResult<Vec<Insight>> {
        Err(Self::error())
    }

    fn chat(&self, _context: &str, _history: &[ChatMessage], _message: &str) -> SpendResult<String> {
        Err(Self::error())
    }
}

/// Insights for the most recent transactions, or a single neutral placeholder
pub fn insights_or_placeholder(
    assistant: &dyn Assistant,
    transactions: &[Transaction],
    currency_symbol: &str,
) -> Vec<Insight> {
    let sample = &transactions[..transactions.len().min(INSIGHT_SAMPLE_SIZE)];
    match assistant.insights(sample, currency_symbol) {
        Ok(insights) => insights,
        Err(err) => {
            tracing::warn!(%err, "insights unavailable");
            vec![Insight::unavailable()]
        }
    }
}

/// A suggested category, or `None` if the assistant fails or answers
/// something outside the category set
pub fn suggest_category(assistant: &dyn Assistant, description: &str) -> Option<Category> {
    if description.trim().is_empty() {
        return None;
    }
    match assistant.categorize(description) {
        Ok(answer) => answer.parse().ok(),
        Err(err) => {
            tracing::warn!(%err, "categorization unavailable");
            None
        }
    }
}

//! CLI commands for recording, deleting and listing transactions

use chrono::NaiveDate;
use clap::Args;

use crate::assistant::{suggest_category, Assistant};
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{SpendError, SpendResult};
use crate::models::{Category, TransactionType};
use crate::services::filter::apply;
use crate::services::{Session, SortKey, TransactionDraft, TransactionFilter};
use crate::storage::Persistence;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. 12.50 or $1,200
    pub amount: String,

    /// What the money was for
    pub description: String,

    /// Category name; suggested by the assistant when omitted
    #[arg(short, long)]
    pub category: Option<Category>,

    /// expense or income
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: TransactionType,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Category/type/date-range filters shared by `list` and `export`
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only this category
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Only expense or only income
    #[arg(short = 't', long = "type")]
    pub kind: Option<TransactionType>,

    /// Earliest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// original, date-desc, date-asc, amount-desc or amount-asc
    #[arg(short, long, default_value = "original")]
    pub sort: String,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TransactionFilter {
        let mut filter = TransactionFilter::new();
        if let Some(category) = self.category {
            filter = filter.category(category);
        }
        if let Some(kind) = self.kind {
            filter = filter.kind(kind);
        }
        if let Some(from) = self.from {
            filter = filter.date_from(from);
        }
        if let Some(to) = self.to {
            filter = filter.date_to(to);
        }
        filter
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse_lenient(&self.sort)
    }
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show at most this many rows
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command<P: Persistence>(
    session: &mut Session<P>,
    assistant: &dyn Assistant,
    args: AddArgs,
    today: NaiveDate,
) -> SpendResult<()> {
    let mut draft = TransactionDraft::new(today);
    draft.kind = args.kind;
    draft.amount = args.amount;
    draft.description = args.description;
    if let Some(date) = args.date {
        draft.date = date;
    }
    match args.category {
        Some(category) => draft.category = category,
        None => draft.apply_category_suggestion(suggest_category(assistant, &draft.description)),
    }

    let txn = session.add_transaction(draft.submit()?);
    println!("Recorded {}", txn.id.short());
    print!("{}", format_transaction_details(&txn, session.currency_symbol()));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command<P: Persistence>(
    session: &mut Session<P>,
    identifier: &str,
) -> SpendResult<()> {
    let txn = session
        .ledger()
        .find(identifier)
        .cloned()
        .ok_or_else(|| SpendError::transaction_not_found(identifier))?;

    session.delete_transaction(txn.id);
    println!("Deleted {} {}", txn.id.short(), txn.description);
    Ok(())
}

/// Handle `list`
pub fn handle_list_command<P: Persistence>(session: &Session<P>, args: &ListArgs) -> SpendResult<()> {
    let mut view = apply(
        session.transactions(),
        &args.filter.to_filter(),
        args.filter.sort_key(),
    );
    let total = view.len();
    if let Some(limit) = args.limit {
        view.truncate(limit);
    }

    print!("{}", format_transaction_register(&view, session.currency_symbol()));
    if view.len() < total {
        println!("Showing {} of {} transactions", view.len(), total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::tests::Scripted;
    use crate::assistant::Unavailable;
    use crate::storage::MemoryStorage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
    }

    fn add_args(amount: &str, description: &str) -> AddArgs {
        AddArgs {
            amount: amount.into(),
            description: description.into(),
            category: None,
            kind: TransactionType::Expense,
            date: None,
        }
    }

    #[test]
    fn test_add_uses_suggestion_and_today() {
        let mut session = Session::load(MemoryStorage::new());
        let assistant = Scripted {
            category: Some("Transport".into()),
            ..Default::default()
        };

        handle_add_command(&mut session, &assistant, add_args("18.40", "Taxi home"), today()).unwrap();

        let txn = &session.transactions()[0];
        assert_eq!(txn.category, Category::Transport);
        assert_eq!(txn.date, "2024-08-20");
        assert_eq!(session.store().saved_transactions().len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut session = Session::load(MemoryStorage::new());
        let err = handle_add_command(&mut session, &Unavailable, add_args("5", "  "), today())
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(session.transactions().is_empty());
    }

    #[test]
    fn test_delete_by_short_id() {
        let mut session = Session::load(MemoryStorage::new());
        handle_add_command(&mut session, &Unavailable, add_args("3", "Tea"), today()).unwrap();
        let short = session.transactions()[0].id.short();

        handle_delete_command(&mut session, &short).unwrap();
        assert!(session.transactions().is_empty());

        let err = handle_delete_command(&mut session, &short).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_filter_args_to_filter() {
        let args = FilterArgs {
            kind: Some(TransactionType::Income),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            sort: "bogus".into(),
            ..Default::default()
        };
        let filter = args.to_filter();
        assert!(!filter.is_empty());
        assert_eq!(args.sort_key(), SortKey::Original);
    }
}

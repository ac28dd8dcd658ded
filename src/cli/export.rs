//! CLI command for CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use super::transaction::FilterArgs;
use crate::error::{SpendError, SpendResult};
use crate::export::{export_file_name, export_view, write_transactions_csv};
use crate::services::filter::apply;
use crate::services::Session;
use crate::storage::Persistence;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, defaults to smartspend_export_<date>.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle `export`
///
/// Exports the filtered view. When the filters match nothing the whole
/// ledger is exported instead.
pub fn handle_export_command<P: Persistence>(
    session: &Session<P>,
    args: &ExportArgs,
    today: NaiveDate,
) -> SpendResult<PathBuf> {
    let view = apply(
        session.transactions(),
        &args.filter.to_filter(),
        args.filter.sort_key(),
    );
    let selected = export_view(&view, session.transactions())?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(today)));

    let file = File::create(&output)
        .map_err(|e| SpendError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_transactions_csv(selected, session.currency_symbol(), &mut writer)?;
    writer
        .flush()
        .map_err(|e| SpendError::Export(e.to_string()))?;

    println!(
        "Exported {} transactions to: {}",
        selected.len(),
        output.display()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewTransaction, TransactionType};
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;

    fn session() -> Session<MemoryStorage> {
        let mut session = Session::load(MemoryStorage::new());
        session.add_transaction(NewTransaction {
            amount: Money::from_cents(999),
            category: Category::Shopping,
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            description: "Socks".into(),
            kind: TransactionType::Expense,
        });
        session
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
    }

    #[test]
    fn test_export_falls_back_to_full_ledger() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.csv");
        let args = ExportArgs {
            output: Some(output.clone()),
            filter: FilterArgs {
                category: Some(Category::Health),
                ..Default::default()
            },
        };

        handle_export_command(&session(), &args, today()).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with('\u{FEFF}'));
        assert!(text.contains("\"Socks\""));
    }

    #[test]
    fn test_export_empty_ledger_fails_without_writing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.csv");
        let args = ExportArgs {
            output: Some(output.clone()),
            filter: FilterArgs::default(),
        };

        let session = Session::load(MemoryStorage::new());
        let err = handle_export_command(&session, &args, today()).unwrap_err();
        assert!(matches!(err, SpendError::NothingToExport));
        assert!(!output.exists());
    }
}

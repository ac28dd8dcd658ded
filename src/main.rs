use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use smartspend::assistant::Unavailable;
use smartspend::cli::{
    handle_add_command, handle_breakdown_command, handle_chat_command, handle_currency_command,
    handle_delete_command, handle_export_command, handle_insights_command, handle_list_command,
    handle_reconcile_command, handle_reset_command, handle_summary_command, handle_theme_command,
    handle_week_command, AddArgs, ExportArgs, ListArgs, Theme,
};
use smartspend::config::SpendPaths;
use smartspend::services::Session;
use smartspend::storage::JsonStorage;

#[derive(Parser)]
#[command(
    name = "smartspend",
    version,
    about = "Personal finance tracker",
    long_about = "SmartSpend keeps a ledger of income and expenses, derives your \
                  balance from it, and breaks spending down by category and week."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add(AddArgs),

    /// Delete a transaction by id or short id
    #[command(alias = "rm")]
    Delete {
        /// Transaction id, e.g. txn-1a2b3c4d
        id: String,
    },

    /// List transactions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show balance, totals and recent transactions
    Summary,

    /// Set the current balance without touching transactions
    Reconcile {
        /// Balance your real account shows, e.g. 1250.00
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Expense totals by category
    Breakdown,

    /// Income and expense per day for one week (Sunday to Saturday)
    Week {
        /// Any date in the week, defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Export transactions to CSV
    Export(ExportArgs),

    /// Show or change the currency symbol
    Currency {
        /// New symbol
        symbol: Option<String>,
        /// Switch between $ and ₹
        #[arg(long, conflicts_with = "symbol")]
        toggle: bool,
    },

    /// Set the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },

    /// Spending insights from the assistant
    Insights,

    /// Ask the assistant about your finances
    Chat {
        /// Your question
        message: String,
    },

    /// Delete all transactions and settings
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    smartspend::init_tracing();
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let store = JsonStorage::new(paths.clone())?;
    let mut session = Session::load(store);
    let today = Local::now().date_naive();
    let assistant = Unavailable;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut session, &assistant, args, today)?,
        Some(Commands::Delete { id }) => handle_delete_command(&mut session, &id)?,
        Some(Commands::List(args)) => handle_list_command(&session, &args)?,
        Some(Commands::Summary) => handle_summary_command(&session)?,
        Some(Commands::Reconcile { target }) => handle_reconcile_command(&mut session, &target)?,
        Some(Commands::Breakdown) => handle_breakdown_command(&session)?,
        Some(Commands::Week { date }) => handle_week_command(&session, date.unwrap_or(today))?,
        Some(Commands::Export(args)) => {
            handle_export_command(&session, &args, today)?;
        }
        Some(Commands::Currency { symbol, toggle }) => {
            handle_currency_command(&mut session, symbol.as_deref(), toggle)?
        }
        Some(Commands::Theme { theme }) => handle_theme_command(&mut session, theme)?,
        Some(Commands::Insights) => handle_insights_command(&session, &assistant)?,
        Some(Commands::Chat { message }) => handle_chat_command(&session, &assistant, &message)?,
        Some(Commands::Reset { yes }) => handle_reset_command(&mut session, yes)?,
        Some(Commands::Config) => {
            println!("SmartSpend Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Balance file:      {}", paths.balance_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", session.currency_symbol());
            println!(
                "  Theme:           {}",
                if session.dark_theme() { "dark" } else { "light" }
            );
            println!("  Transactions:    {}", session.transactions().len());
        }
        None => {
            handle_summary_command(&session)?;
            println!();
            println!("Run 'smartspend --help' for usage information.");
        }
    }

    Ok(())
}

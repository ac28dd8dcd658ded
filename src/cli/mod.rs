//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and report layers.

pub mod export;
pub mod reconcile;
pub mod report;
pub mod settings;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs};
pub use reconcile::handle_reconcile_command;
pub use report::{
    handle_breakdown_command, handle_chat_command, handle_insights_command,
    handle_summary_command, handle_week_command,
};
pub use settings::{handle_currency_command, handle_reset_command, handle_theme_command, Theme};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_list_command, AddArgs, FilterArgs, ListArgs,
};

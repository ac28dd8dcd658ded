//! SmartSpend - personal finance tracker
//!
//! This library provides the core of the SmartSpend application: an ordered
//! ledger of income and expense transactions, a balance that is always
//! derived from an initial offset plus the ledger's net flow, spending
//! analytics, and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and stored preferences
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, the ledger)
//! - `storage`: Persistence boundary and the JSON file store
//! - `services`: Totals, reconciliation, filtering and the session
//! - `reports`: Category breakdown, weekly series, assistant snapshot
//! - `export`: CSV export
//! - `assistant`: Seam for optional AI collaborators
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use smartspend::config::SpendPaths;
//! use smartspend::services::Session;
//! use smartspend::storage::JsonStorage;
//!
//! let store = JsonStorage::new(SpendPaths::new()?)?;
//! let session = Session::load(store);
//! println!("{}", session.totals().balance);
//! ```

use std::sync::Once;

pub mod assistant;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "smartspend=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

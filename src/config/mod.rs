//! Configuration module for SmartSpend
//!
//! - Platform path resolution
//! - Display settings (currency symbol, theme)

pub mod paths;
pub mod settings;

pub use paths::SpendPaths;
pub use settings::Settings;

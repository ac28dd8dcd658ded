//! User settings for SmartSpend
//!
//! Display preferences only: currency symbol and theme. Neither affects any
//! computed figure.

use serde::{Deserialize, Serialize};

/// Currency symbols the toggle cycles between
pub const TOGGLE_SYMBOLS: (&str, &str) = ("$", "₹");

/// User settings persisted to `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Dark theme preference
    #[serde(default)]
    pub dark_theme: bool,
}

fn default_schema_version() -> u32 {
    1
}

pub fn default_currency() -> String {
    TOGGLE_SYMBOLS.0.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            dark_theme: false,
        }
    }
}

/// The symbol a toggle switches to: `$` and `₹` swap, anything else goes to `$`
pub fn toggled_symbol(current: &str) -> &'static str {
    if current == TOGGLE_SYMBOLS.0 {
        TOGGLE_SYMBOLS.1
    } else {
        TOGGLE_SYMBOLS.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!settings.dark_theme);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = serde_json::from_str(r#"{"dark_theme": true}"#).unwrap();
        assert!(settings.dark_theme);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(toggled_symbol("$"), "₹");
        assert_eq!(toggled_symbol("₹"), "$");
        assert_eq!(toggled_symbol("€"), "$");
    }
}

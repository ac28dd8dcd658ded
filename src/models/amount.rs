//! Stored transaction amounts
//!
//! Amounts written by this crate are always numeric, but stored data may
//! carry text (older exports, hand edits). [`Amount`] keeps whatever was
//! stored and [`Amount::coerce`] is the one place that turns it into
//! [`Money`] for arithmetic.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// A transaction amount as stored: a typed value or raw stored text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// Numeric amount
    Value(Money),
    /// Text that came from storage verbatim
    Raw(String),
}

impl Amount {
    /// Interpret the stored amount as money
    ///
    /// Raw text is accepted when it is a plain decimal ("12.50") or any
    /// finite float literal ("1e3").
    pub fn parse(&self) -> Result<Money, MoneyParseError> {
        match self {
            Amount::Value(money) => Ok(*money),
            Amount::Raw(text) => Money::parse(text).or_else(|err| {
                text.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Money::from_f64)
                    .ok_or(err)
            }),
        }
    }

    /// Total numeric cast: non-numeric amounts count as zero
    pub fn coerce(&self) -> Money {
        self.parse().unwrap_or_else(|err| {
            tracing::debug!(%err, "non-numeric amount counted as zero");
            Money::zero()
        })
    }

    /// Whether the stored amount is numeric
    pub fn is_numeric(&self) -> bool {
        self.parse().is_ok()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Value(Money::zero())
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount::Value(money)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(money) => write!(f, "{}", money),
            Amount::Raw(text) => write!(f, "{}", text),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Value(money) => serializer.serialize_f64(money.to_f64()),
            Amount::Raw(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => match n.as_f64().and_then(Money::from_f64) {
                Some(money) => Amount::Value(money),
                None => Amount::Raw(n.to_string()),
            },
            serde_json::Value::String(s) => Amount::Raw(s),
            other => Amount::Raw(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_json_becomes_value() {
        let amount: Amount = serde_json::from_str("12.5").unwrap();
        assert_eq!(amount, Amount::Value(Money::from_cents(1250)));
    }

    #[test]
    fn test_text_json_is_kept_raw() {
        let amount: Amount = serde_json::from_str("\"42.10\"").unwrap();
        assert_eq!(amount, Amount::Raw("42.10".into()));
        assert_eq!(amount.coerce(), Money::from_cents(4210));
    }

    #[test]
    fn test_non_numeric_coerces_to_zero() {
        let amount = Amount::Raw("lunch".into());
        assert!(amount.parse().is_err());
        assert!(!amount.is_numeric());
        assert_eq!(amount.coerce(), Money::zero());

        let null: Amount = serde_json::from_str("null").unwrap();
        assert_eq!(null.coerce(), Money::zero());
    }

    #[test]
    fn test_float_literal_text() {
        assert_eq!(Amount::Raw("1e3".into()).coerce(), Money::from_cents(100_000));
    }

    #[test]
    fn test_serialize_keeps_shape() {
        let value = Amount::Value(Money::from_cents(20000));
        assert_eq!(serde_json::to_string(&value).unwrap(), "200.0");
        let raw = Amount::Raw("n/a".into());
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"n/a\"");
    }
}

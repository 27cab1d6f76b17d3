//! Value objects for the gas pipeline
//!
//! Diagnostic payloads attached to costs and results are heterogeneous but
//! closed: every value is one of the [`MetaValue`] variants.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Quantity of gas in million British thermal units.
pub type Mmbtu = Decimal;

/// Diagnostic metadata attached to a single cost item.
pub type Meta = BTreeMap<String, MetaValue>;

/// Explanatory notes attached to an operation result.
///
/// Ordered by key so that iteration (and serialized output) is deterministic.
pub type Notes = BTreeMap<String, MetaValue>;

/// A single metadata or note value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetaValue {
    /// Exact decimal (quantities, rates, amounts)
    Decimal(Decimal),
    /// Whole number (days, counts)
    Integer(i64),
    /// Identifier or free text (counterparties, locations)
    Text(String),
    /// Point in time
    Timestamp(NaiveDateTime),
}

impl MetaValue {
    /// Returns the decimal payload, if this is a decimal value.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            MetaValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetaValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Decimal(d) => write!(f, "{}", d),
            MetaValue::Integer(i) => write!(f, "{}", i),
            MetaValue::Text(s) => f.write_str(s),
            MetaValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<Decimal> for MetaValue {
    fn from(value: Decimal) -> Self {
        MetaValue::Decimal(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Integer(value)
    }
}

impl From<u32> for MetaValue {
    fn from(value: u32) -> Self {
        MetaValue::Integer(i64::from(value))
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

impl From<&String> for MetaValue {
    fn from(value: &String) -> Self {
        MetaValue::Text(value.clone())
    }
}

impl From<NaiveDateTime> for MetaValue {
    fn from(value: NaiveDateTime) -> Self {
        MetaValue::Timestamp(value)
    }
}

/// Build a `(key, value)` pair for collecting into [`Meta`] or [`Notes`].
pub fn meta_entry(key: impl Into<String>, value: impl Into<MetaValue>) -> (String, MetaValue) {
    (key.into(), value.into())
}

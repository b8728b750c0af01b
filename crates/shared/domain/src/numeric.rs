//! Numeric coercion for loosely-typed input.
//!
//! Identifiers arrive as path segments and some payload fields arrive as
//! either JSON numbers or numeric strings. Everything funnels through
//! [`check_number`] before it reaches the database.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{MSG_INVALID_NUMBER, MSG_INVALID_SUFFIX};
use crate::error::{DomainError, DomainResult};

/// A number as the client sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    #[default]
    Null,
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Int(n) => write!(f, "{}", n),
            RawNumber::Float(n) => write!(f, "{}", n),
            RawNumber::Text(s) => write!(f, "{:?}", s),
            RawNumber::Bool(b) => write!(f, "{}", b),
            RawNumber::Null => write!(f, "null"),
        }
    }
}

impl From<i32> for RawNumber {
    fn from(n: i32) -> Self {
        RawNumber::Int(i64::from(n))
    }
}

impl From<i64> for RawNumber {
    fn from(n: i64) -> Self {
        RawNumber::Int(n)
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Float(n)
    }
}

impl From<String> for RawNumber {
    fn from(s: String) -> Self {
        RawNumber::Text(s)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber::Text(s.to_string())
    }
}

impl From<Option<i32>> for RawNumber {
    fn from(n: Option<i32>) -> Self {
        n.map(RawNumber::from).unwrap_or(RawNumber::Null)
    }
}

/// Coerce a raw value into an `i32`, or `None` if it is not an integral
/// number in range.
pub fn coerce_number(value: &RawNumber) -> Option<i32> {
    match value {
        RawNumber::Int(n) => i32::try_from(*n).ok(),
        RawNumber::Float(n) => integral(*n),
        RawNumber::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            match s.parse::<i64>() {
                Ok(n) => i32::try_from(n).ok(),
                Err(_) => s.parse::<f64>().ok().and_then(integral),
            }
        }
        RawNumber::Bool(_) | RawNumber::Null => None,
    }
}

fn integral(n: f64) -> Option<i32> {
    if n.is_finite() && n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
        Some(n as i32)
    } else {
        None
    }
}

/// Validate that a raw value is numeric.
pub fn check_number(value: &RawNumber) -> DomainResult<i32> {
    coerce_number(value).ok_or_else(|| DomainError::invalid_input(MSG_INVALID_NUMBER))
}

/// Validate that a raw value is numeric, naming the offending field on failure.
pub fn check_labeled_number(value: &RawNumber, label: &str) -> DomainResult<i32> {
    coerce_number(value)
        .ok_or_else(|| DomainError::invalid_input(format!("{} {}", label, MSG_INVALID_SUFFIX)))
}

/// Deserialize a field that is present in the payload as `Some`, even when it
/// is `null`. Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

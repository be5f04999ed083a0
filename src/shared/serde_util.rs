//! Custom serde helpers for WHMCS wire formats.
//!
//! WHMCS is loose about scalar types: the same id arrives as `5` in one reply
//! and `"5"` in another, amounts arrive as strings or numbers. These helpers
//! accept either and are meant for `Option` fields marked
//! `#[serde(default, deserialize_with = "...")]`.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a string, number or bool into `Option<String>`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected a scalar, found {}", other))),
    }
}

// Whole floats in [-2^63, 2^63) convert exactly.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Deserializes an integer or numeric string into `Option<i64>`.
///
/// Blank strings are treated as absent.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(f))
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer: {}", n))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid integer: {:?}", s)))
        }
        Some(other) => Err(D::Error::custom(format!("expected an integer, found {}", other))),
    }
}

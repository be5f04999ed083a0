//! Monetary amount parsing.
//!
//! WHMCS sends amounts as plain strings (`"10.00"`), but some replies embed a
//! currency tag or thousands separators (`"$1,250.00 USD"`, `"KES 9900.00"`).
//! The first numeric token is what counts.

use crate::error::FieldError;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

lazy_static! {
    static ref NUMERIC_TOKEN: Regex = Regex::new(r"-?\d+(?:\.\d+)?").unwrap();
}

/// Extracts the first numeric token of `text` as a `Decimal`.
///
/// Returns `None` when the text holds no number at all.
pub fn extract_decimal(text: &str) -> Option<Decimal> {
    let cleaned = text.replace(',', "");
    let token = NUMERIC_TOKEN.find(&cleaned)?;
    Decimal::from_str(token.as_str()).ok()
}

/// Parses a required amount field.
pub fn parse_amount(field: &'static str, value: Option<&str>) -> Result<Decimal, FieldError> {
    let text = value.ok_or(FieldError::Missing(field))?;
    extract_decimal(text).ok_or_else(|| FieldError::InvalidAmount {
        field,
        value: text.to_string(),
    })
}

/// Parses an optional amount field; absent stays `None`, malformed fails.
pub fn parse_opt_amount(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Decimal>, FieldError> {
    value.map(|text| parse_amount(field, Some(text))).transpose()
}

/// Parses an amount that defaults to zero when absent.
pub fn parse_amount_or_zero(field: &'static str, value: Option<&str>) -> Result<Decimal, FieldError> {
    Ok(parse_opt_amount(field, value)?.unwrap_or(Decimal::ZERO))
}

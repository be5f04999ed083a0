//! Shared helpers used across all domain modules: form parameters, lenient
//! serde adapters, amount and date parsing, container normalization.

pub mod amount;
pub mod date;
pub mod normalize;
pub mod params;
pub mod serde_util;

pub use amount::{extract_decimal, parse_amount, parse_amount_or_zero, parse_opt_amount};
pub use date::{parse_date, parse_datetime};
pub use normalize::{
    convert_element, convert_nested, decode_element, element_error, extract_id, normalize_list,
    normalize_list_with, unwrap_container,
};
pub use params::{Action, Parameters};

use crate::error::FieldError;

/// Parses a comma-joined id list such as `"12,13"`. Blank input is empty.
pub fn parse_id_list(field: &'static str, value: Option<&str>) -> Result<Vec<i64>, FieldError> {
    let Some(text) = value else {
        return Ok(Vec::new());
    };
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| FieldError::InvalidIdList {
                field,
                value: text.to_string(),
            })
        })
        .collect()
}

/// Requires an optional wire field.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("serviceids", Some("12,13")), Ok(vec![12, 13]));
        assert_eq!(parse_id_list("serviceids", Some("7")), Ok(vec![7]));
        assert_eq!(parse_id_list("serviceids", Some("")), Ok(vec![]));
        assert_eq!(parse_id_list("serviceids", None), Ok(vec![]));
    }

    #[test]
    fn test_parse_id_list_rejects_garbage() {
        assert!(parse_id_list("domainids", Some("1,x")).is_err());
    }

    #[test]
    fn test_required() {
        assert_eq!(required("id", Some(1)), Ok(1));
        assert_eq!(required::<i64>("id", None), Err(FieldError::Missing("id")));
    }
}

//! Response normalization: raw WHMCS payloads → domain records.
//!
//! List replies are wrapped twice, e.g. `{"orders": {"order": [..]}}`. When
//! there is no data WHMCS sends the container as `[]` or `""` instead of a
//! mapping; [`unwrap_container`] treats any non-mapping container as empty.
//!
//! Elements are converted one by one through a wire struct and a
//! `TryFrom<Wire>` impl. The first failure aborts the batch with a
//! [`SerializationError`] naming the offending element.

use crate::error::{FieldError, SerializationError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Short type name used in error reports (`Order`, not `whmcs_sdk::domain::order::Order`).
pub fn target_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Extracts `payload[container][item]` as a list of raw elements.
pub fn unwrap_container(
    payload: &Value,
    container: &str,
    item: &str,
) -> Result<Vec<Value>, SerializationError> {
    let wrapper = match payload.get(container) {
        Some(v @ Value::Object(_)) => v,
        _ => return Ok(Vec::new()),
    };
    match wrapper.get(item) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(elements)) => Ok(elements.clone()),
        Some(_) => Err(SerializationError::new(
            wrapper.clone(),
            "list",
            format!("`{}.{}` is not a list", container, item),
        )),
    }
}

/// Failure converting `raw` into `T`.
pub fn element_error<T>(raw: &Value, cause: impl std::fmt::Display) -> SerializationError {
    SerializationError::new(raw.clone(), target_name::<T>(), cause.to_string())
}

/// Deserializes one raw element into its wire struct `W`, reporting failures
/// against the final type `T`.
pub fn decode_element<W, T>(raw: &Value) -> Result<W, SerializationError>
where
    W: DeserializeOwned,
{
    serde_json::from_value(raw.clone()).map_err(|e| element_error::<T>(raw, e))
}

/// Converts one raw element through its wire struct.
pub fn convert_element<W, T>(raw: &Value) -> Result<T, SerializationError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = FieldError>,
{
    let wire = decode_element::<W, T>(raw)?;
    T::try_from(wire).map_err(|e| element_error::<T>(raw, e))
}

/// Converts the mapping stored under `payload[key]`.
pub fn convert_nested<W, T>(payload: &Value, key: &str) -> Result<T, SerializationError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = FieldError>,
{
    match payload.get(key) {
        Some(inner @ Value::Object(_)) => convert_element::<W, T>(inner),
        _ => Err(SerializationError::new(
            payload.clone(),
            target_name::<T>(),
            format!("missing `{}` object", key),
        )),
    }
}

/// Reads a top-level id such as `clientid` or `orderid`.
pub fn extract_id(payload: &Value, key: &str) -> Result<i64, SerializationError> {
    let parsed = match payload.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        SerializationError::new(payload.clone(), "id", format!("missing or invalid `{}`", key))
    })
}

/// Converts every element of a container with `convert`, pruning `None`s.
pub fn normalize_list_with<T, F>(
    payload: &Value,
    container: &str,
    item: &str,
    mut convert: F,
) -> Result<Vec<T>, SerializationError>
where
    F: FnMut(&Value) -> Result<Option<T>, SerializationError>,
{
    let elements = unwrap_container(payload, container, item)?;
    let mut converted = Vec::with_capacity(elements.len());
    for element in &elements {
        converted.push(convert(element)?);
    }
    Ok(converted.into_iter().flatten().collect())
}

/// Converts every element of a container through `W` into `T`.
pub fn normalize_list<W, T>(
    payload: &Value,
    container: &str,
    item: &str,
) -> Result<Vec<T>, SerializationError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = FieldError>,
{
    normalize_list_with(payload, container, item, |raw| {
        convert_element::<W, T>(raw).map(Some)
    })
}

//! Reply interpretation.
//!
//! WHMCS answers every action with HTTP 200 and a JSON mapping whose `result`
//! field is `"success"` or `"error"`. Misconfigured installations answer with
//! HTML or nothing at all; those are failures too.

use crate::error::WhmcsError;
use serde_json::Value;

/// Body of a WHMCS reply, parsed as far as it goes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Raw(String),
    Empty,
}

impl ResponseBody {
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }
}

/// What the transport hands back: HTTP status and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The remote `message` field, when it is a non-empty string.
pub fn error_message(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Checks a reply and returns its JSON mapping.
///
/// Fails with [`WhmcsError::Api`] when the body is not a mapping, when
/// `result == "error"`, or when the HTTP status is not a success. The remote
/// `message` is used when present, otherwise `default_message`.
pub fn interpret(raw: RawResponse, default_message: &str) -> Result<Value, WhmcsError> {
    let success = raw.is_success();
    let payload = match raw.body {
        ResponseBody::Json(value @ Value::Object(_)) => value,
        other => {
            tracing::debug!(status = raw.status, body = ?other, "WHMCS reply is not a JSON object");
            return Err(WhmcsError::Api(default_message.to_string()));
        }
    };

    let rejected = payload.get("result").and_then(Value::as_str) == Some("error");
    if rejected || !success {
        let message = error_message(&payload).unwrap_or_else(|| default_message.to_string());
        tracing::debug!(status = raw.status, %message, "WHMCS rejected the request");
        return Err(WhmcsError::Api(message));
    }
    Ok(payload)
}

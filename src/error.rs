//! Unified SDK error types.

use serde_json::Value;
use thiserror::Error;

/// Message carried by every [`WhmcsError::Connection`].
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not reach whmcs server.";

/// Top-level SDK error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WhmcsError {
    /// The transport could not reach the WHMCS host.
    #[error("{0}")]
    Connection(String),

    /// WHMCS answered with `result: "error"` or an unusable body.
    #[error("{0}")]
    Api(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WhmcsError {
    pub fn connection() -> Self {
        WhmcsError::Connection(CONNECTION_ERROR_MESSAGE.to_string())
    }

    /// Human-readable message, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            WhmcsError::Connection(m) | WhmcsError::Api(m) | WhmcsError::Config(m) => m.clone(),
            WhmcsError::Serialization(e) => e.to_string(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<HttpError> for WhmcsError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::InvalidUrl(url) => WhmcsError::Config(format!("invalid API url: {url}")),
            #[cfg(feature = "http")]
            HttpError::Reqwest(cause) => {
                tracing::warn!(error = %cause, "WHMCS transport failure");
                WhmcsError::connection()
            }
        }
    }
}

/// A raw WHMCS value that could not be converted into a domain record.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not convert {raw} into {target}: {description}")]
pub struct SerializationError {
    /// The offending element, exactly as received.
    pub raw: Value,
    /// Short name of the type the normalizer was building.
    pub target: &'static str,
    pub description: String,
}

impl SerializationError {
    pub fn new(raw: Value, target: &'static str, description: impl Into<String>) -> Self {
        Self {
            raw,
            target,
            description: description.into(),
        }
    }
}

/// Field-level failures raised while converting a wire struct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("missing field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` is not a valid amount: {value:?}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("field `{field}` is not a valid id list: {value:?}")]
    InvalidIdList { field: &'static str, value: String },
}

pub type WhmcsResult<T> = Result<T, WhmcsError>;

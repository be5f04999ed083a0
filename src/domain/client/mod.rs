//! Client domain: WHMCS client accounts.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::error::SerializationError;
use crate::shared::normalize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use params::{
    client_parameters, create_client_parameters, update_client_parameters, ClientDetails,
    ClientQuery,
};

// ─── Client ──────────────────────────────────────────────────────────────────

/// A WHMCS client account, as returned by `GetClientsDetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub uuid: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_country_code: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub currency_id: Option<i64>,
    pub currency_code: Option<String>,
    pub status: Option<String>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// `GetClientsDetails` reply → [`Client`]. The record sits under `client`.
pub fn normalize_client(payload: &Value) -> Result<Client, SerializationError> {
    normalize::convert_nested::<wire::ClientResponse, Client>(payload, "client")
}

/// `AddClient` / `UpdateClient` reply → client id.
pub fn normalize_client_id(payload: &Value) -> Result<i64, SerializationError> {
    normalize::extract_id(payload, "clientid")
}

//! Wire types for client replies.

use crate::shared::serde_util;
use serde::Deserialize;

/// The `client` object of a `GetClientsDetails` reply.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ClientResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    /// Legacy duplicate of `id` sent by older installs.
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub firstname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub lastname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub phonecc: Option<String>,
    /// Formatted number (`+254.712345678`); preferred over `phonenumber`.
    #[serde(default, rename = "telephoneNumber", deserialize_with = "serde_util::opt_string")]
    pub telephone_number: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub phonenumber: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub companyname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub address1: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub currency: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
}

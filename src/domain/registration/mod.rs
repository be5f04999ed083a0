//! Registration domain: a client's registered domain names, availability
//! checks and nameserver updates.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::error::SerializationError;
use crate::shared::normalize;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use params::{
    client_domain_parameters, nameserver_parameters, whois_parameters, DomainQuery,
    NameserverUpdate, MAX_NAMESERVERS,
};

/// A domain name registered through WHMCS (`GetClientsDomains`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredDomain {
    pub id: i64,
    pub domain_name: Option<String>,
    /// Years.
    pub registration_period: Option<i64>,
    pub first_payment_amount: Decimal,
    pub recurring_amount: Decimal,
    pub payment_method_name: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// `GetClientsDomains` reply → domains. WHMCS sends `"domains": ""` when there
/// are none.
pub fn normalize_domains(payload: &Value) -> Result<Vec<RegisteredDomain>, SerializationError> {
    normalize::normalize_list::<wire::DomainResponse, RegisteredDomain>(payload, "domains", "domain")
}

/// `DomainWhois` reply → whether the name can be registered.
pub fn normalize_availability(payload: &Value) -> bool {
    payload.get("status").and_then(Value::as_str) == Some("available")
}

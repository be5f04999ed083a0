//! Service domain: a client's purchased products and their upgrades.

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
    client_product_parameters, service_update_parameters, upgrade_parameters,
    ClientProductQuery, ServiceUpdate, UpgradeRequest, UpgradeType,
};

// ─── ClientProduct ───────────────────────────────────────────────────────────

/// A product a client has purchased (a WHMCS "service").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProduct {
    pub id: i64,
    pub client_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub registration_date: Option<NaiveDate>,
    pub name: Option<String>,
    pub translated_name: Option<String>,
    pub group_name: Option<String>,
    pub translated_group_name: Option<String>,
    pub domain: Option<String>,
    pub suspension_reason: Option<String>,
    pub first_payment_amount: Decimal,
    pub recurring_amount: Decimal,
    pub payment_method: Option<String>,
    pub payment_method_name: Option<String>,
    pub billing_cycle: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

// ─── ProductUpgrade ──────────────────────────────────────────────────────────

/// Result of `UpgradeProduct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpgrade {
    pub id: Option<i64>,
    pub old_product_id: Option<i64>,
    pub old_product_name: Option<String>,
    pub new_product_id: Option<i64>,
    pub new_product_name: Option<String>,
    pub new_product_billing_cycle: Option<String>,
    pub days_until_renewal: Option<i64>,
    pub price: Decimal,
    pub order_id: Option<i64>,
    pub order_number: Option<String>,
    pub invoice_id: Option<i64>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// `GetClientsProducts` reply → client products.
pub fn normalize_client_products(payload: &Value) -> Result<Vec<ClientProduct>, SerializationError> {
    normalize::normalize_list::<wire::ClientProductResponse, ClientProduct>(payload, "products", "product")
}

/// `UpgradeProduct` reply → [`ProductUpgrade`]. The fields sit at the top level.
pub fn normalize_upgrade(payload: &Value) -> Result<ProductUpgrade, SerializationError> {
    normalize::convert_element::<wire::UpgradeResponse, ProductUpgrade>(payload)
}

/// `UpdateClientProduct` reply → service id.
pub fn normalize_service_id(payload: &Value) -> Result<i64, SerializationError> {
    normalize::extract_id(payload, "serviceid")
}

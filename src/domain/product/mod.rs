//! Product domain: catalogue products and per-currency pricing.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::error::SerializationError;
use crate::shared::normalize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub use params::{product_parameters, ProductQuery};

/// Currency used when the requested one has no pricing entry.
pub const FALLBACK_CURRENCY: &str = "USD";

// ─── Pricing ─────────────────────────────────────────────────────────────────

/// Recurring prices of a product in one currency.
///
/// WHMCS uses `-1.00` for a disabled cycle; that value is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub prefix: Option<String>,
    pub monthly: Option<Decimal>,
    pub quarterly: Option<Decimal>,
    pub semiannually: Option<Decimal>,
    pub annually: Option<Decimal>,
    pub biennially: Option<Decimal>,
    pub triennially: Option<Decimal>,
}

impl Pricing {
    /// Looks up `currency` (case-insensitive), then `USD`, then an empty pricing.
    pub fn lookup(table: &BTreeMap<String, Pricing>, currency: &str) -> Pricing {
        table
            .get(&currency.to_uppercase())
            .or_else(|| table.get(FALLBACK_CURRENCY))
            .cloned()
            .unwrap_or_default()
    }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A catalogue product from `GetProducts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub group_id: Option<i64>,
    pub module: Option<String>,
    pub product_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// WHMCS `paytype`: `free`, `onetime` or `recurring`.
    pub billing_cycle: Option<String>,
    /// Pricing in the currency the product was normalized for.
    pub pricing: Pricing,
    /// Every currency WHMCS returned, keyed by currency code.
    pub pricing_table: BTreeMap<String, Pricing>,
}

impl Product {
    /// Re-selects [`Product::pricing`] for `currency`.
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.pricing = Pricing::lookup(&self.pricing_table, currency);
        self
    }
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// `GetProducts` reply → products priced in `currency`.
pub fn normalize_products(payload: &Value, currency: &str) -> Result<Vec<Product>, SerializationError> {
    normalize::normalize_list_with(payload, "products", "product", |raw| {
        let product = normalize::convert_element::<wire::ProductResponse, Product>(raw)?;
        Ok(Some(product.with_currency(currency)))
    })
}

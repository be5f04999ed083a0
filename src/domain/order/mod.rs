//! Order domain: orders, line items, order placement.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod params;
pub mod wire;

use crate::error::SerializationError;
use crate::shared::normalize;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use params::{
    bulk_order_parameters, cancel_order_parameters, domain_order_parameters, order_parameters,
    product_order_parameters, BulkOrder, DomainOrder, DomainType, OrderOptions, OrderQuery,
    ProductOrder,
};

// ─── OrderItem ───────────────────────────────────────────────────────────────

/// One line of an order (`lineitems.lineitem`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// `product`, `domain`, `addon`, `upgrade`, ...
    pub item_type: Option<String>,
    pub rel_id: Option<i64>,
    pub product: Option<String>,
    pub product_type: Option<String>,
    pub domain: Option<String>,
    pub billing_cycle: Option<String>,
    pub amount: Decimal,
    pub status: Option<String>,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order from `GetOrders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: Option<String>,
    pub client_id: i64,
    pub date: Option<NaiveDateTime>,
    pub nameservers: Option<String>,
    pub transfer_secret: Option<String>,
    pub renewals: Option<String>,
    pub promo_code: Option<String>,
    pub promo_type: Option<String>,
    pub promo_value: Option<String>,
    pub amount: Decimal,
    /// `0` or absent when no invoice was generated.
    pub invoice_id: Option<i64>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub payment_method_name: Option<String>,
    pub fraud_module: Option<String>,
    pub fraud_output: Option<String>,
    pub fraud_data: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItem>,
}

// ─── OrderPlacement ──────────────────────────────────────────────────────────

/// Result of `AddOrder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacement {
    pub order_id: i64,
    pub invoice_id: Option<i64>,
    pub service_ids: Vec<i64>,
    pub addon_ids: Vec<i64>,
    pub domain_ids: Vec<i64>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// `GetOrders` reply → orders.
pub fn normalize_orders(payload: &Value) -> Result<Vec<Order>, SerializationError> {
    normalize::normalize_list::<wire::OrderResponse, Order>(payload, "orders", "order")
}

/// `AddOrder` reply → [`OrderPlacement`].
pub fn normalize_order_placement(payload: &Value) -> Result<OrderPlacement, SerializationError> {
    normalize::convert_element::<wire::AddOrderResponse, OrderPlacement>(payload)
}

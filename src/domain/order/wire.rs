//! Wire types for order replies.

use crate::shared::serde_util;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of `orders.order` in `GetOrders`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub ordernum: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub nameservers: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub transfersecret: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub renewals: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub promocode: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub promotype: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub promovalue: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub invoiceid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentstatus: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethod: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethodname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub fraudmodule: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub fraudoutput: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub frauddata: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "line_items")]
    pub lineitems: Vec<OrderItemResponse>,
}

/// One element of `lineitems.lineitem`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderItemResponse {
    #[serde(default, rename = "type", deserialize_with = "serde_util::opt_string")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub relid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub producttype: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub billingcycle: Option<String>,
    /// Currency-tagged, e.g. `"$10.00 USD"`.
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
}

/// `AddOrder` reply body.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AddOrderResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub orderid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub invoiceid: Option<i64>,
    /// Comma-joined ids.
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub serviceids: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub addonids: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub domainids: Option<String>,
}

/// `lineitems` is `{"lineitem": [..]}`, or `[]` when the order has none.
fn line_items<'de, D>(deserializer: D) -> Result<Vec<OrderItemResponse>, D::Error>
where
    D: Deserializer<'de>,
{
    let wrapper = Option::<Value>::deserialize(deserializer)?;
    match wrapper.as_ref().and_then(|w| w.get("lineitem")) {
        Some(items @ Value::Array(_)) => {
            serde_json::from_value(items.clone()).map_err(|e| <D::Error as serde::de::Error>::custom(e))
        }
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(other) => Err(<D::Error as serde::de::Error>::custom(format!(
            "`lineitems.lineitem` is not a list: {}",
            other
        ))),
    }
}

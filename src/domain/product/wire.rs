//! Wire types for `GetProducts`.

use crate::shared::serde_util;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProductResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub pid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub gid: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "serde_util::opt_string")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paytype: Option<String>,
    #[serde(default, deserialize_with = "pricing_table")]
    pub pricing: BTreeMap<String, PricingResponse>,
}

/// One currency entry of `pricing`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PricingResponse {
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub prefix: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub monthly: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub quarterly: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub semiannually: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub annually: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub biennially: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub triennially: Option<String>,
}

/// `pricing` is a mapping keyed by currency, or `[]` for free products.
/// Keys are uppercased.
fn pricing_table<'de, D>(deserializer: D) -> Result<BTreeMap<String, PricingResponse>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(currency, entry)| {
                serde_json::from_value(entry)
                    .map(|pricing| (currency.to_uppercase(), pricing))
                    .map_err(|e| <D::Error as serde::de::Error>::custom(e))
            })
            .collect(),
        _ => Ok(BTreeMap::new()),
    }
}

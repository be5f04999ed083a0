//! Wire types for `GetAffiliates`.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AffiliateResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub clientid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub visitors: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub balance: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub withdrawn: Option<String>,
}

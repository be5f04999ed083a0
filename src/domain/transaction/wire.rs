//! Wire types for `GetTransactions`.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TransactionResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub invoiceid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub refundid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub transid: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub gateway: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub amountin: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub amountout: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub fees: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub rate: Option<String>,
}

//! Wire types for `GetClientsDomains`.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DomainResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub domainname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub regperiod: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub firstpaymentamount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub recurringamount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethodname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub nextduedate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
}

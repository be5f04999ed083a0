//! Wire types for service replies.

use crate::shared::serde_util;
use serde::Deserialize;

/// One element of `products.product` in `GetClientsProducts`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ClientProductResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub clientid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub orderid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub pid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub regdate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub translated_name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub groupname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub translated_groupname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub suspensionreason: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub firstpaymentamount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub recurringamount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethod: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethodname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub billingcycle: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub nextduedate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub notes: Option<String>,
}

/// `UpgradeProduct` reply body.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpgradeResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub oldproductid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub oldproductname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub newproductid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub newproductname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub newproductbillingcycle: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub daysuntilrenewal: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub orderid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub invoiceid: Option<i64>,
}

//! Wire types for `GetInvoices`.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct InvoiceResponse {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub invoicenum: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub userid: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub firstname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub lastname: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub duedate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub datepaid: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub last_capture_attempt: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub subtotal: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub credit: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub tax: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub tax2: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub total: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub taxrate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub taxrate2: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub paymentmethod: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub notes: Option<String>,
}

//! Wire types for `GetPaymentMethods`.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PaymentMethodResponse {
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub displayname: Option<String>,
}

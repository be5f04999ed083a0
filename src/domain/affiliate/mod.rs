//! Affiliate domain: referral program enrolment and balances.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::config::WhmcsConfig;
use crate::error::SerializationError;
use crate::shared::{normalize, Action, Parameters};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: i64,
    pub client_id: Option<i64>,
    pub date_enrolled: Option<NaiveDate>,
    pub visitors: Option<i64>,
    pub balance: Decimal,
    pub withdrawn: Decimal,
}

/// `AffiliateActivate` for a client.
pub fn affiliate_activate_parameters(config: &WhmcsConfig, client_id: i64) -> Parameters {
    let mut params = Parameters::for_action(config, Action::AffiliateActivate);
    params.insert("userid", client_id);
    params
}

/// `GetAffiliates`, optionally narrowed to one client.
pub fn affiliate_parameters(config: &WhmcsConfig, client_id: Option<i64>) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetAffiliates);
    params.insert_opt("userid", client_id);
    params
}

/// `GetAffiliates` reply → affiliates.
pub fn normalize_affiliates(payload: &Value) -> Result<Vec<Affiliate>, SerializationError> {
    normalize::normalize_list::<wire::AffiliateResponse, Affiliate>(payload, "affiliates", "affiliate")
}

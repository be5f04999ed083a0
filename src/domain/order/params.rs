//! Request parameters for order actions.
//!
//! All three `AddOrder` variants share [`OrderOptions`] for price overrides,
//! promotions and affiliate attribution.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};
use rust_decimal::Decimal;

/// Most nameserver slots `AddOrder` accepts.
pub const MAX_ORDER_NAMESERVERS: usize = 5;

/// Optional extras shared by every `AddOrder` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Overrides the catalogue price.
    pub price: Option<Decimal>,
    pub promo_code: Option<String>,
    pub affiliate_id: Option<i64>,
}

/// Order for a single product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductOrder {
    pub client_id: i64,
    pub product_id: i64,
    pub payment_method: String,
    pub billing_cycle: Option<String>,
    pub options: OrderOptions,
}

/// Order for several products on one billing cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOrder {
    pub client_id: i64,
    pub product_ids: Vec<i64>,
    pub payment_method: String,
    pub billing_cycle: Option<String>,
    pub options: OrderOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainType {
    #[default]
    Register,
    Transfer,
}

impl DomainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Transfer => "transfer",
        }
    }
}

/// Order for a domain registration or transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainOrder {
    pub client_id: i64,
    pub payment_method: String,
    pub domain: String,
    pub domain_type: Option<DomainType>,
    /// Years.
    pub registration_period: Option<u32>,
    /// Transfer authorization code.
    pub epp_code: Option<String>,
    pub nameservers: Vec<String>,
    pub options: OrderOptions,
}

/// Filters for `GetOrders`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub client_id: Option<i64>,
    pub order_id: Option<i64>,
    pub status: Option<String>,
}

impl OrderQuery {
    pub fn for_client(client_id: i64) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }
}

fn add_order(config: &WhmcsConfig, client_id: i64, payment_method: &str) -> Parameters {
    let mut params = Parameters::for_action(config, Action::AddOrder);
    params
        .insert("clientid", client_id)
        .insert("paymentmethod", payment_method);
    params
}

fn insert_options(params: &mut Parameters, options: &OrderOptions) {
    params
        .insert_opt("priceoverride", options.price)
        .insert_opt("promocode", options.promo_code.as_deref())
        .insert_opt("affid", options.affiliate_id);
}

pub fn product_order_parameters(config: &WhmcsConfig, order: &ProductOrder) -> Parameters {
    let mut params = add_order(config, order.client_id, &order.payment_method);
    params
        .insert("pid", order.product_id)
        .insert_opt("billingcycle", order.billing_cycle.as_deref());
    insert_options(&mut params, &order.options);
    params
}

pub fn bulk_order_parameters(config: &WhmcsConfig, order: &BulkOrder) -> Parameters {
    let mut params = add_order(config, order.client_id, &order.payment_method);
    params
        .insert_list("pid", &order.product_ids)
        .insert_opt("billingcycle", order.billing_cycle.as_deref());
    insert_options(&mut params, &order.options);
    params
}

pub fn domain_order_parameters(config: &WhmcsConfig, order: &DomainOrder) -> Parameters {
    let mut params = add_order(config, order.client_id, &order.payment_method);
    params
        .insert("domain", &order.domain)
        .insert_opt("domaintype", order.domain_type.map(|t| t.as_str()))
        .insert_opt("regperiod", order.registration_period)
        .insert_opt("eppcode", order.epp_code.as_deref())
        .insert_numbered("nameserver", &order.nameservers, MAX_ORDER_NAMESERVERS);
    insert_options(&mut params, &order.options);
    params
}

pub fn order_parameters(config: &WhmcsConfig, query: &OrderQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetOrders);
    params
        .insert_opt("userid", query.client_id)
        .insert_opt("id", query.order_id)
        .insert_opt("status", query.status.as_deref());
    params
}

pub fn cancel_order_parameters(config: &WhmcsConfig, order_id: i64) -> Parameters {
    let mut params = Parameters::for_action(config, Action::CancelOrder);
    params.insert("orderid", order_id);
    params
}

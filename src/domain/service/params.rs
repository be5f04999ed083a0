//! Request parameters for service actions.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

/// Filters for `GetClientsProducts`. `client_id` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientProductQuery {
    pub client_id: i64,
    pub product_id: Option<i64>,
    pub service_id: Option<i64>,
    pub domain: Option<String>,
}

impl ClientProductQuery {
    pub fn for_client(client_id: i64) -> Self {
        Self {
            client_id,
            ..Default::default()
        }
    }
}

/// Input for `UpdateClientProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceUpdate {
    pub service_id: i64,
    pub payment_method: String,
    pub billing_cycle: Option<String>,
    /// New product (package) id to attach to the service.
    pub package_id: Option<i64>,
}

/// What an `UpgradeProduct` call changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpgradeType {
    #[default]
    Product,
    ConfigOptions,
}

impl UpgradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::ConfigOptions => "configoptions",
        }
    }
}

/// Input for `UpgradeProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeRequest {
    pub service_id: i64,
    pub payment_method: String,
    pub upgrade_type: UpgradeType,
    pub new_product_id: Option<i64>,
    pub new_billing_cycle: Option<String>,
    pub promo_code: Option<String>,
}

pub fn client_product_parameters(config: &WhmcsConfig, query: &ClientProductQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetClientsProducts);
    params
        .insert("clientid", query.client_id)
        .insert_opt("pid", query.product_id)
        .insert_opt("serviceid", query.service_id)
        .insert_opt("domain", query.domain.as_deref());
    params
}

pub fn service_update_parameters(config: &WhmcsConfig, update: &ServiceUpdate) -> Parameters {
    let mut params = Parameters::for_action(config, Action::UpdateClientProduct);
    params
        .insert("serviceid", update.service_id)
        .insert("paymentmethod", &update.payment_method)
        .insert_opt("billingcycle", update.billing_cycle.as_deref())
        .insert_opt("pid", update.package_id);
    params
}

pub fn upgrade_parameters(config: &WhmcsConfig, request: &UpgradeRequest) -> Parameters {
    let mut params = Parameters::for_action(config, Action::UpgradeProduct);
    params
        .insert("serviceid", request.service_id)
        .insert("paymentmethod", &request.payment_method)
        .insert("type", request.upgrade_type.as_str())
        .insert_opt("newproductid", request.new_product_id)
        .insert_opt("newproductbillingcycle", request.new_billing_cycle.as_deref())
        .insert_opt("promocode", request.promo_code.as_deref());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WhmcsConfig {
        WhmcsConfig::new("https://example.com", "identifier", "secret", "access")
    }

    #[test]
    fn test_client_products_requires_only_client() {
        let params = client_product_parameters(&config(), &ClientProductQuery::for_client(17));
        assert_eq!(params.action(), Some("GetClientsProducts"));
        assert_eq!(params.get("clientid"), Some("17"));
        for key in ["pid", "serviceid", "domain"] {
            assert!(!params.contains_key(key));
        }
    }

    #[test]
    fn test_client_products_filters() {
        let query = ClientProductQuery {
            client_id: 17,
            product_id: Some(92),
            service_id: Some(311),
            domain: Some("shop.example.com".into()),
        };
        let params = client_product_parameters(&config(), &query);
        assert_eq!(params.get("pid"), Some("92"));
        assert_eq!(params.get("serviceid"), Some("311"));
        assert_eq!(params.get("domain"), Some("shop.example.com"));
    }

    #[test]
    fn test_service_update() {
        let update = ServiceUpdate {
            service_id: 311,
            payment_method: "paypal".into(),
            billing_cycle: Some("Annually".into()),
            package_id: None,
        };
        let params = service_update_parameters(&config(), &update);
        assert_eq!(params.action(), Some("UpdateClientProduct"));
        assert_eq!(params.get("serviceid"), Some("311"));
        assert_eq!(params.get("paymentmethod"), Some("paypal"));
        assert_eq!(params.get("billingcycle"), Some("Annually"));
        assert!(!params.contains_key("pid"));
    }

    #[test]
    fn test_upgrade() {
        let request = UpgradeRequest {
            service_id: 311,
            payment_method: "paypal".into(),
            upgrade_type: UpgradeType::Product,
            new_product_id: Some(93),
            new_billing_cycle: Some("monthly".into()),
            promo_code: None,
        };
        let params = upgrade_parameters(&config(), &request);
        assert_eq!(params.action(), Some("UpgradeProduct"));
        assert_eq!(params.get("serviceid"), Some("311"));
        assert_eq!(params.get("paymentmethod"), Some("paypal"));
        assert_eq!(params.get("type"), Some("product"));
        assert_eq!(params.get("newproductid"), Some("93"));
        assert_eq!(params.get("newproductbillingcycle"), Some("monthly"));
        assert!(!params.contains_key("promocode"));
    }

    #[test]
    fn test_config_options_upgrade_type() {
        let request = UpgradeRequest {
            upgrade_type: UpgradeType::ConfigOptions,
            ..Default::default()
        };
        assert_eq!(upgrade_parameters(&config(), &request).get("type"), Some("configoptions"));
    }
}

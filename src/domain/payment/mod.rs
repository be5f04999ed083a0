//! Payment domain: the gateways a WHMCS installation accepts.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::config::WhmcsConfig;
use crate::error::{FieldError, SerializationError};
use crate::shared::{normalize, required, Action, Parameters};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An enabled payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Gateway module name; what `paymentmethod` fields expect.
    pub module: String,
    pub display_name: Option<String>,
}

impl TryFrom<wire::PaymentMethodResponse> for PaymentMethod {
    type Error = FieldError;

    fn try_from(source: wire::PaymentMethodResponse) -> Result<Self, Self::Error> {
        Ok(PaymentMethod {
            module: required("module", source.module)?,
            display_name: source.displayname,
        })
    }
}

pub fn payment_method_parameters(config: &WhmcsConfig) -> Parameters {
    Parameters::for_action(config, Action::GetPaymentMethods)
}

/// `GetPaymentMethods` reply → payment methods.
pub fn normalize_payment_methods(payload: &Value) -> Result<Vec<PaymentMethod>, SerializationError> {
    normalize::normalize_list::<wire::PaymentMethodResponse, PaymentMethod>(
        payload,
        "paymentmethods",
        "paymentmethod",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_methods() {
        let payload = json!({
            "result": "success",
            "totalresults": 2,
            "paymentmethods": {"paymentmethod": [
                {"module": "mpesa", "displayname": "M-Pesa"},
                {"module": "paypal", "displayname": "PayPal"}
            ]}
        });
        let methods = normalize_payment_methods(&payload).unwrap();
        assert_eq!(
            methods,
            vec![
                PaymentMethod {
                    module: "mpesa".into(),
                    display_name: Some("M-Pesa".into()),
                },
                PaymentMethod {
                    module: "paypal".into(),
                    display_name: Some("PayPal".into()),
                },
            ]
        );
    }

    #[test]
    fn test_module_is_required() {
        let payload = json!({"paymentmethods": {"paymentmethod": [{"displayname": "Cash"}]}});
        let err = normalize_payment_methods(&payload).unwrap_err();
        assert_eq!(err.raw, json!({"displayname": "Cash"}));
        assert_eq!(err.target, "PaymentMethod");
    }

    #[test]
    fn test_parameters_carry_only_base_fields() {
        let config = WhmcsConfig::new("https://example.com", "identifier", "secret", "access");
        let params = payment_method_parameters(&config);
        assert_eq!(params.action(), Some("GetPaymentMethods"));
        assert_eq!(params.len(), 5);
    }
}

//! Request parameters for client actions.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

/// Contact details accepted by `AddClient` and `UpdateClient`.
///
/// Every field is optional; unset fields are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Lookup for `GetClientsDetails`, by email or id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientQuery {
    pub email: Option<String>,
    pub client_id: Option<i64>,
}

impl ClientQuery {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            client_id: None,
        }
    }

    pub fn by_id(client_id: i64) -> Self {
        Self {
            email: None,
            client_id: Some(client_id),
        }
    }
}

fn insert_details(params: &mut Parameters, details: &ClientDetails) {
    params
        .insert_opt("firstname", details.first_name.as_deref())
        .insert_opt("lastname", details.last_name.as_deref())
        .insert_opt("email", details.email.as_deref())
        .insert_opt("companyname", details.company.as_deref())
        .insert_opt("address1", details.address.as_deref())
        .insert_opt("city", details.city.as_deref())
        .insert_opt("state", details.state.as_deref())
        .insert_opt("postcode", details.postcode.as_deref())
        .insert_opt("country", details.country.as_deref())
        .insert_opt("phonenumber", details.phone.as_deref())
        .insert_opt("password2", details.password.as_deref());
}

pub fn create_client_parameters(config: &WhmcsConfig, details: &ClientDetails) -> Parameters {
    let mut params = Parameters::for_action(config, Action::AddClient);
    insert_details(&mut params, details);
    params
}

pub fn update_client_parameters(
    config: &WhmcsConfig,
    client_id: i64,
    details: &ClientDetails,
) -> Parameters {
    let mut params = Parameters::for_action(config, Action::UpdateClient);
    params.insert("clientid", client_id);
    insert_details(&mut params, details);
    params
}

pub fn client_parameters(config: &WhmcsConfig, query: &ClientQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetClientsDetails);
    params
        .insert_opt("email", query.email.as_deref())
        .insert_opt("clientid", query.client_id);
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WhmcsConfig {
        WhmcsConfig::new("https://example.com", "identifier", "secret", "access")
    }

    #[test]
    fn test_create_client_maps_every_field() {
        let details = ClientDetails {
            first_name: Some("Jane".into()),
            last_name: Some("Wanjiru".into()),
            email: Some("jane@example.com".into()),
            company: Some("Acme Ltd".into()),
            address: Some("1 Moi Avenue".into()),
            city: Some("Nairobi".into()),
            state: Some("Nairobi".into()),
            postcode: Some("00100".into()),
            country: Some("KE".into()),
            phone: Some("712345678".into()),
            password: Some("hunter2".into()),
        };
        let params = create_client_parameters(&config(), &details);
        assert_eq!(params.action(), Some("AddClient"));
        assert_eq!(params.get("firstname"), Some("Jane"));
        assert_eq!(params.get("lastname"), Some("Wanjiru"));
        assert_eq!(params.get("email"), Some("jane@example.com"));
        assert_eq!(params.get("companyname"), Some("Acme Ltd"));
        assert_eq!(params.get("address1"), Some("1 Moi Avenue"));
        assert_eq!(params.get("city"), Some("Nairobi"));
        assert_eq!(params.get("state"), Some("Nairobi"));
        assert_eq!(params.get("postcode"), Some("00100"));
        assert_eq!(params.get("country"), Some("KE"));
        assert_eq!(params.get("phonenumber"), Some("712345678"));
        assert_eq!(params.get("password2"), Some("hunter2"));
        assert_eq!(params.len(), 16);
    }

    #[test]
    fn test_create_client_omits_unset_fields() {
        let details = ClientDetails {
            email: Some("jane@example.com".into()),
            phone: Some(String::new()),
            ..Default::default()
        };
        let params = create_client_parameters(&config(), &details);
        assert_eq!(params.get("email"), Some("jane@example.com"));
        for key in ["firstname", "lastname", "phonenumber", "password2", "address1"] {
            assert!(!params.contains_key(key), "{key} should be absent");
        }
    }

    #[test]
    fn test_update_client_includes_id() {
        let details = ClientDetails {
            city: Some("Mombasa".into()),
            ..Default::default()
        };
        let params = update_client_parameters(&config(), 17, &details);
        assert_eq!(params.action(), Some("UpdateClient"));
        assert_eq!(params.get("clientid"), Some("17"));
        assert_eq!(params.get("city"), Some("Mombasa"));
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn test_client_lookup() {
        let params = client_parameters(&config(), &ClientQuery::by_email("jane@example.com"));
        assert_eq!(params.action(), Some("GetClientsDetails"));
        assert_eq!(params.get("email"), Some("jane@example.com"));
        assert!(!params.contains_key("clientid"));

        let params = client_parameters(&config(), &ClientQuery::by_id(17));
        assert_eq!(params.get("clientid"), Some("17"));
        assert!(!params.contains_key("email"));
    }
}

//! Request parameters for domain-name actions.

use crate::config::WhmcsConfig;
use crate::shared::{Action, Parameters};

/// Most nameserver slots `DomainUpdateNameservers` accepts.
pub const MAX_NAMESERVERS: usize = 5;

/// Filters for `GetClientsDomains`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainQuery {
    pub client_id: Option<i64>,
    pub domain_id: Option<i64>,
    pub domain: Option<String>,
}

impl DomainQuery {
    pub fn for_client(client_id: i64) -> Self {
        Self {
            client_id: Some(client_id),
            ..Default::default()
        }
    }
}

/// Input for `DomainUpdateNameservers`. Identify the domain by id or name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameserverUpdate {
    pub domain_id: Option<i64>,
    pub domain: Option<String>,
    /// Sent as `ns1`..`ns5`; extra entries are dropped.
    pub nameservers: Vec<String>,
}

pub fn client_domain_parameters(config: &WhmcsConfig, query: &DomainQuery) -> Parameters {
    let mut params = Parameters::for_action(config, Action::GetClientsDomains);
    params
        .insert_opt("clientid", query.client_id)
        .insert_opt("domainid", query.domain_id)
        .insert_opt("domain", query.domain.as_deref());
    params
}

pub fn whois_parameters(config: &WhmcsConfig, domain: &str) -> Parameters {
    let mut params = Parameters::for_action(config, Action::DomainWhois);
    params.insert("domain", domain);
    params
}

pub fn nameserver_parameters(config: &WhmcsConfig, update: &NameserverUpdate) -> Parameters {
    let mut params = Parameters::for_action(config, Action::DomainUpdateNameservers);
    params
        .insert_opt("domainid", update.domain_id)
        .insert_opt("domain", update.domain.as_deref())
        .insert_numbered("ns", &update.nameservers, MAX_NAMESERVERS);
    params
}

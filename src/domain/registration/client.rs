//! Domains sub-client: registered names, availability and nameservers.

use super::params::{client_domain_parameters, nameserver_parameters, whois_parameters};
use super::{normalize_availability, normalize_domains, DomainQuery, NameserverUpdate, RegisteredDomain};
use crate::client::WhmcsClient;
use crate::error::WhmcsError;

const RETRIEVE_ERROR: &str = "We were unable to retrieve your domains";
const WHOIS_ERROR: &str = "We were unable to check the domain's availability";
const NAMESERVER_ERROR: &str = "We were unable to update your nameservers";

pub struct Domains<'a> {
    pub(crate) client: &'a WhmcsClient,
}

impl<'a> Domains<'a> {
    pub async fn get(&self, query: &DomainQuery) -> Result<Vec<RegisteredDomain>, WhmcsError> {
        let params = client_domain_parameters(self.client.config(), query);
        let payload = self.client.call(&params, RETRIEVE_ERROR).await?;
        Ok(normalize_domains(&payload)?)
    }

    pub async fn is_available(&self, domain: &str) -> Result<bool, WhmcsError> {
        let params = whois_parameters(self.client.config(), domain);
        let payload = self.client.call(&params, WHOIS_ERROR).await?;
        Ok(normalize_availability(&payload))
    }

    pub async fn update_nameservers(&self, update: &NameserverUpdate) -> Result<(), WhmcsError> {
        let params = nameserver_parameters(self.client.config(), update);
        self.client.call(&params, NAMESERVER_ERROR).await?;
        Ok(())
    }
}

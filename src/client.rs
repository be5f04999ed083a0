//! High-level client: `WhmcsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared transport and accessor methods.

use crate::config::WhmcsConfig;
use crate::domain::affiliate::client::Affiliates;
use crate::domain::client::client::Clients;
use crate::domain::invoice::client::Invoices;
use crate::domain::order::client::Orders;
use crate::domain::payment::client::PaymentMethods;
use crate::domain::product::client::Products;
use crate::domain::registration::client::Domains;
use crate::domain::service::client::Services;
use crate::domain::transaction::client::Transactions;
use crate::error::WhmcsError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{response, WhmcsHttp};
use crate::shared::Parameters;

use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::affiliate::client::Affiliates as AffiliatesClient;
pub use crate::domain::client::client::Clients as ClientsClient;
pub use crate::domain::invoice::client::Invoices as InvoicesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::payment::client::PaymentMethods as PaymentMethodsClient;
pub use crate::domain::product::client::Products as ProductsClient;
pub use crate::domain::registration::client::Domains as DomainsClient;
pub use crate::domain::service::client::Services as ServicesClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// The primary entry point for the WHMCS SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.products()`, `client.orders()`, etc. Cheap to clone; clones share
/// the connection pool.
#[derive(Debug, Clone)]
pub struct WhmcsClient {
    pub(crate) http: WhmcsHttp,
    pub(crate) config: WhmcsConfig,
}

impl WhmcsClient {
    pub fn builder() -> WhmcsClientBuilder {
        WhmcsClientBuilder::default()
    }

    /// Builds a client from `WHMCS_*` environment variables.
    pub fn from_env() -> Result<Self, WhmcsError> {
        Self::builder().config(WhmcsConfig::from_env()).build()
    }

    pub fn config(&self) -> &WhmcsConfig {
        &self.config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn clients(&self) -> Clients<'_> {
        Clients { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    /// Products a client has purchased.
    pub fn services(&self) -> Services<'_> {
        Services { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains { client: self }
    }

    pub fn payment_methods(&self) -> PaymentMethods<'_> {
        PaymentMethods { client: self }
    }

    pub fn affiliates(&self) -> Affiliates<'_> {
        Affiliates { client: self }
    }

    // ── Internal ─────────────────────────────────────────────────────────

    /// Sends one action and returns the checked reply payload.
    pub(crate) async fn call(
        &self,
        params: &Parameters,
        default_message: &str,
    ) -> Result<Value, WhmcsError> {
        let raw = self.http.post(params).await?;
        response::interpret(raw, default_message)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WhmcsClientBuilder {
    config: WhmcsConfig,
    timeout: Duration,
}

impl Default for WhmcsClientBuilder {
    fn default() -> Self {
        Self {
            config: WhmcsConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WhmcsClientBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: WhmcsConfig) -> Self {
        self.config = config;
        self
    }

    /// WHMCS installation root, e.g. `https://example.com/billing`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, identifier: &str, secret: &str, access_key: &str) -> Self {
        self.config.identifier = identifier.to_string();
        self.config.secret = secret.to_string();
        self.config.access_key = access_key.to_string();
        self
    }

    pub fn autoauth_key(mut self, key: &str) -> Self {
        self.config.autoauth_key = Some(key.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<WhmcsClient, WhmcsError> {
        if self.config.base_url.trim().is_empty() {
            return Err(WhmcsError::Config("base URL is empty".to_string()));
        }
        let http = WhmcsHttp::new(&self.config.api_url(), self.timeout)?;
        Ok(WhmcsClient {
            http,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_derives_api_url() {
        let client = WhmcsClient::builder()
            .base_url("https://example.com/billing/")
            .credentials("identifier", "secret", "access")
            .build()
            .unwrap();
        assert_eq!(client.http.api_url(), "https://example.com/billing/includes/api.php");
        assert_eq!(client.config().identifier, "identifier");
        assert_eq!(client.config().autoauth_key, None);
    }

    #[test]
    fn test_builder_defaults_to_olitt_billing() {
        let client = WhmcsClient::builder().build().unwrap();
        assert_eq!(
            client.http.api_url(),
            "https://www.olitt.com/billing/includes/api.php"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = WhmcsClient::builder().base_url("  ").build().unwrap_err();
        assert!(matches!(err, WhmcsError::Config(_)));
    }

    #[test]
    fn test_unparsable_base_url_is_rejected() {
        let err = WhmcsClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, WhmcsError::Config(_)));
    }
}

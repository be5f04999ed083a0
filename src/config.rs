//! WHMCS credentials and installation root.
//!
//! The config is a plain value passed to every parameter builder. Nothing is
//! cached globally; [`WhmcsConfig::from_env`] reads the environment each time
//! it is called.

use crate::network;
use std::env;

pub const ENV_URL: &str = "WHMCS_URL";
pub const ENV_IDENTIFIER: &str = "WHMCS_IDENTIFIER_KEY";
pub const ENV_SECRET: &str = "WHMCS_SECRET_KEY";
pub const ENV_ACCESS_KEY: &str = "WHMCS_ACCESS_KEY";
pub const ENV_AUTOAUTH_KEY: &str = "WHMCS_AUTOAUTH_KEY";

/// Response format requested from WHMCS on every call.
pub const RESPONSE_TYPE: &str = "json";

#[derive(Clone, PartialEq, Eq)]
pub struct WhmcsConfig {
    /// Installation root, e.g. `https://example.com/billing`.
    pub base_url: String,
    pub identifier: String,
    pub secret: String,
    pub access_key: String,
    /// Key used to sign AutoAuth login links. Falls back to `secret`.
    pub autoauth_key: Option<String>,
}

impl WhmcsConfig {
    pub fn new(
        base_url: impl Into<String>,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            identifier: identifier.into(),
            secret: secret.into(),
            access_key: access_key.into(),
            autoauth_key: None,
        }
    }

    pub fn with_autoauth_key(mut self, key: impl Into<String>) -> Self {
        self.autoauth_key = Some(key.into());
        self
    }

    /// Reads the config from the process environment.
    ///
    /// Missing credentials become empty strings, a missing URL becomes
    /// [`network::DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_URL).unwrap_or_else(|_| network::DEFAULT_BASE_URL.to_string()),
            identifier: env::var(ENV_IDENTIFIER).unwrap_or_default(),
            secret: env::var(ENV_SECRET).unwrap_or_default(),
            access_key: env::var(ENV_ACCESS_KEY).unwrap_or_default(),
            autoauth_key: env::var(ENV_AUTOAUTH_KEY).ok().filter(|k| !k.is_empty()),
        }
    }

    pub fn api_url(&self) -> String {
        network::join(&self.base_url, network::API_PATH)
    }

    pub fn login_url(&self) -> String {
        network::join(&self.base_url, network::LOGIN_PATH)
    }

    pub(crate) fn signing_key(&self) -> &str {
        self.autoauth_key.as_deref().unwrap_or(&self.secret)
    }
}

impl Default for WhmcsConfig {
    fn default() -> Self {
        Self::new(network::DEFAULT_BASE_URL, "", "", "")
    }
}

// Credentials never reach logs through `{:?}`.
impl std::fmt::Debug for WhmcsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhmcsConfig")
            .field("base_url", &self.base_url)
            .field("identifier", &"<redacted>")
            .field("secret", &"<redacted>")
            .field("access_key", &"<redacted>")
            .field("autoauth_key", &self.autoauth_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

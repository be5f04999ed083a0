//! Low-level HTTP client: `WhmcsHttp`.
//!
//! Every WHMCS action is a form-encoded POST to the same endpoint. Returns the
//! raw reply; checking `result` happens in [`crate::http::response`].

use crate::error::HttpError;
use crate::http::response::{RawResponse, ResponseBody};
use crate::shared::Parameters;

use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for `includes/api.php`.
#[derive(Debug, Clone)]
pub struct WhmcsHttp {
    api_url: Url,
    client: Client,
}

impl WhmcsHttp {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let api_url =
            Url::parse(api_url).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { api_url, client })
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_str()
    }

    /// POSTs `params` as `application/x-www-form-urlencoded`.
    ///
    /// Only the action name is logged; the payload carries credentials.
    pub async fn post(&self, params: &Parameters) -> Result<RawResponse, HttpError> {
        tracing::debug!(
            action = params.action().unwrap_or_default(),
            "POST {}",
            self.api_url
        );
        let resp = self
            .client
            .post(self.api_url.clone())
            .form(params)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        Ok(RawResponse {
            status,
            body: ResponseBody::from_text(&text),
        })
    }
}

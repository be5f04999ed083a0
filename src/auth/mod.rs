//! AutoAuth: signed single-sign-on links into the WHMCS client area.
//!
//! WHMCS logs a client in when `dologin.php` receives their email, a Unix
//! timestamp and `sha1(email + timestamp + key)`, then redirects to `goto`.
//! The concatenation order is fixed by WHMCS; changing it breaks every link.
//!
//! These helpers are pure and always available (no feature gates).

use crate::config::WhmcsConfig;
use crate::error::WhmcsError;
use serde::Serialize;
use sha1::{Digest, Sha1};

/// Client-area page showing an invoice with its payment options.
pub fn invoice_target(invoice_id: i64) -> String {
    format!("viewinvoice.php?id={}", invoice_id)
}

/// `hex(sha1(email + timestamp + key))`.
pub fn autoauth_hash(email: &str, timestamp: i64, key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(email.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Serialize)]
struct AutoAuthQuery<'a> {
    email: &'a str,
    timestamp: i64,
    hash: &'a str,
    goto: &'a str,
}

/// Builds `{base_url}/dologin.php?email=..&timestamp=..&hash=..&goto=..`.
///
/// Signed with `autoauth_key`, or the API secret when none is configured.
pub fn autoauth_url(
    config: &WhmcsConfig,
    email: &str,
    timestamp: i64,
    goto: &str,
) -> Result<String, WhmcsError> {
    let hash = autoauth_hash(email, timestamp, config.signing_key());
    let query = serde_urlencoded::to_string(AutoAuthQuery {
        email,
        timestamp,
        hash: &hash,
        goto,
    })
    .map_err(|e| WhmcsError::Config(format!("cannot encode login link: {}", e)))?;
    Ok(format!("{}?{}", config.login_url(), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "jane@example.com";
    const TIMESTAMP: i64 = 1_615_713_600;

    #[test]
    fn test_hash_concatenates_email_timestamp_key() {
        assert_eq!(
            autoauth_hash(EMAIL, TIMESTAMP, "autoauth-key"),
            "096d7aa64170553bae07b138604c5619c9e63b98"
        );
    }

    #[test]
    fn test_hash_depends_on_every_input() {
        let base = autoauth_hash(EMAIL, TIMESTAMP, "k");
        assert_ne!(base, autoauth_hash("john@example.com", TIMESTAMP, "k"));
        assert_ne!(base, autoauth_hash(EMAIL, TIMESTAMP + 1, "k"));
        assert_ne!(base, autoauth_hash(EMAIL, TIMESTAMP, "other"));
        assert_eq!(base.len(), 40);
    }

    #[test]
    fn test_invoice_url() {
        let config = WhmcsConfig::new("https://example.com/billing/", "id", "secret", "access")
            .with_autoauth_key("autoauth-key");
        let url = autoauth_url(&config, EMAIL, TIMESTAMP, &invoice_target(402)).unwrap();
        assert_eq!(
            url,
            "https://example.com/billing/dologin.php?email=jane%40example.com\
             &timestamp=1615713600\
             &hash=096d7aa64170553bae07b138604c5619c9e63b98\
             &goto=viewinvoice.php%3Fid%3D402"
        );
    }

    #[test]
    fn test_url_signed_with_secret_without_autoauth_key() {
        let config = WhmcsConfig::new("https://example.com", "id", "autoauth-key", "access");
        let url = autoauth_url(&config, EMAIL, TIMESTAMP, "clientarea.php").unwrap();
        assert!(url.contains("hash=096d7aa64170553bae07b138604c5619c9e63b98"));
        assert!(url.ends_with("goto=clientarea.php"));
    }
}

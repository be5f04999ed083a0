//! Network URL constants for the WHMCS SDK.

/// Default WHMCS installation root.
pub const DEFAULT_BASE_URL: &str = "https://www.olitt.com/billing";

/// API endpoint, relative to the installation root.
pub const API_PATH: &str = "includes/api.php";

/// AutoAuth login endpoint, relative to the installation root.
pub const LOGIN_PATH: &str = "dologin.php";

/// Joins an installation root and a relative path.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_trims_trailing_slash() {
        assert_eq!(
            join("https://example.com/billing/", API_PATH),
            "https://example.com/billing/includes/api.php"
        );
        assert_eq!(
            join("https://example.com/billing", LOGIN_PATH),
            "https://example.com/billing/dologin.php"
        );
    }
}

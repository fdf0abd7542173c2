//! Store URL normalization and REST endpoint construction.

use storesync_core::{StoreConfig, DEFAULT_API_VERSION};

/// Canonicalizes an operator-entered store URL.
///
/// Trailing slashes are stripped, and when no `http://` / `https://` scheme
/// is present one is prepended according to `use_ssl`. Nothing else is
/// validated; a malformed host shows up later as a connection failure.
///
/// ```
/// use storesync_woo::normalize_store_url;
///
/// assert_eq!(normalize_store_url("shop.example.com/", true), "https://shop.example.com");
/// assert_eq!(normalize_store_url("shop.example.com", false), "http://shop.example.com");
/// assert_eq!(normalize_store_url("http://shop.example.com/", true), "http://shop.example.com");
/// ```
#[must_use]
pub fn normalize_store_url(raw: &str, use_ssl: bool) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if has_http_scheme(trimmed) {
        return trimmed.to_owned();
    }
    let scheme = if use_ssl { "https" } else { "http" };
    format!("{scheme}://{trimmed}")
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Absolute endpoint URLs for one store, derived from a [`StoreConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoints {
    root: String,
    api_version: String,
}

impl StoreEndpoints {
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        let api_version = config.api_version.trim().trim_matches('/');
        let api_version = if api_version.is_empty() {
            DEFAULT_API_VERSION
        } else {
            api_version
        };
        Self {
            root: normalize_store_url(&config.store_url, config.use_ssl),
            api_version: api_version.to_owned(),
        }
    }

    /// Normalized store root, without a trailing slash.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// `{root}/wp-json/`, the REST discovery document.
    #[must_use]
    pub fn discovery(&self) -> String {
        format!("{}/wp-json/", self.root)
    }

    #[must_use]
    pub fn products(&self) -> String {
        self.resource("products")
    }

    #[must_use]
    pub fn product(&self, product_id: &str) -> String {
        self.resource(&format!("products/{product_id}"))
    }

    #[must_use]
    pub fn system_status(&self) -> String {
        self.resource("system_status")
    }

    fn resource(&self, path: &str) -> String {
        format!("{}/wp-json/{}/{path}", self.root, self.api_version)
    }
}

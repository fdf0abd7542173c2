use serde::{Deserialize, Serialize};

/// API version used when the caller omits one, and the namespace the REST
/// discovery document must advertise.
pub const DEFAULT_API_VERSION: &str = "wc/v3";

/// Connection settings for one WooCommerce store, supplied by the caller on
/// every request. Never persisted.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Storefront URL as typed by the operator, e.g. `"shop.example.com/"`.
    /// Normalize with `storesync_woo::normalize_store_url` before use.
    pub store_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Scheme to assume when `store_url` has none.
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("store_url", &self.store_url)
            .field("consumer_key", &"[redacted]")
            .field("consumer_secret", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_use_ssl() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let cfg: StoreConfig = serde_json::from_str(
            r#"{
                "storeUrl": "https://shop.example.com",
                "consumerKey": "ck_1",
                "consumerSecret": "cs_1",
                "apiVersion": "wc/v2",
                "useSsl": false
            }"#,
        )
        .expect("deserialize");
        assert_eq!(cfg.store_url, "https://shop.example.com");
        assert_eq!(cfg.consumer_key, "ck_1");
        assert_eq!(cfg.api_version, "wc/v2");
        assert!(!cfg.use_ssl);
    }

    #[test]
    fn missing_version_and_ssl_use_defaults() {
        let cfg: StoreConfig = serde_json::from_str(
            r#"{"storeUrl": "shop.example.com", "consumerKey": "k", "consumerSecret": "s"}"#,
        )
        .expect("deserialize");
        assert_eq!(cfg.api_version, "wc/v3");
        assert!(cfg.use_ssl);
    }

    #[test]
    fn debug_redacts_credentials() {
        let cfg = StoreConfig {
            store_url: "https://shop.example.com".to_string(),
            consumer_key: "ck_live_secret".to_string(),
            consumer_secret: "cs_live_secret".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_ssl: true,
        };
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("ck_live_secret"));
        assert!(!debug.contains("cs_live_secret"));
        assert!(debug.contains("shop.example.com"));
    }
}

use serde::{Deserialize, Serialize};

/// Outcome of a connection diagnostic run.
///
/// `message` is a fixed, multi-line remediation guide selected by the
/// failing step; `data` is present only when every step passed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ConnectionInfo>,
}

impl DiagnosticResult {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn connected(message: impl Into<String>, info: ConnectionInfo) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(info),
        }
    }
}

/// Store facts gathered by a successful diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub total_products: u64,
    /// Remote WooCommerce version, or `"Unknown"` when the lookup failed.
    pub woo_version: String,
    pub api_version: String,
    pub store_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_omits_data_field() {
        let json = serde_json::to_value(DiagnosticResult::failure("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn connection_info_serializes_camel_case() {
        let result = DiagnosticResult::connected(
            "ok",
            ConnectionInfo {
                total_products: 12,
                woo_version: "8.5.1".to_string(),
                api_version: "wc/v3".to_string(),
                store_url: "https://shop.example.com".to_string(),
            },
        );
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["data"]["totalProducts"], 12);
        assert_eq!(json["data"]["wooVersion"], "8.5.1");
        assert_eq!(json["data"]["apiVersion"], "wc/v3");
        assert_eq!(json["data"]["storeUrl"], "https://shop.example.com");
    }
}

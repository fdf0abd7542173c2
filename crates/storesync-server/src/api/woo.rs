//! The WooCommerce shim dispatcher: one JSON endpoint, three actions.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use storesync_core::StoreConfig;
use storesync_woo::WooError;

use crate::middleware::RequestId;

use super::{AppState, ShimError};

/// Page size used when a `fetch` request omits `limit`.
const DEFAULT_FETCH_LIMIT: u32 = 10;

/// Actions the dispatcher understands, as they appear in the `action` field.
const KNOWN_ACTIONS: [&str; 3] = ["test", "fetch", "update"];

/// A decoded dispatcher request.
///
/// Any other body fields (including the legacy `endpoint`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub(super) enum WooRequest {
    Test {
        config: StoreConfig,
    },
    Fetch {
        config: StoreConfig,
        #[serde(default)]
        limit: Option<u32>,
        #[serde(default)]
        page: Option<u32>,
    },
    Update {
        config: StoreConfig,
        #[serde(rename = "productId")]
        product_id: ProductId,
        #[serde(rename = "productData", default)]
        product_data: serde_json::Value,
    },
}

impl WooRequest {
    fn action(&self) -> &'static str {
        match self {
            Self::Test { .. } => "test",
            Self::Fetch { .. } => "fetch",
            Self::Update { .. } => "update",
        }
    }
}

/// Dashboards send product IDs both as JSON numbers and as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ProductId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Why a dispatcher body was refused.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum DecodeError {
    /// `action` is missing or not one of [`KNOWN_ACTIONS`].
    InvalidAction,
    /// Body is not JSON, or a known action is missing or mistypes a field.
    Malformed(String),
}

impl DecodeError {
    /// Only an unrecognized action is a 400; any other decode failure falls
    /// under the dispatcher's catch-all 500.
    fn into_shim_error(self) -> ShimError {
        match self {
            Self::InvalidAction => ShimError::new(StatusCode::BAD_REQUEST, "Invalid action"),
            Self::Malformed(message) => ShimError::new(StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }
}

/// Decodes a dispatcher body.
pub(super) fn decode_request(body: &[u8]) -> Result<WooRequest, DecodeError> {
    let value = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|e| DecodeError::Malformed(format!("invalid JSON body: {e}")))?;

    let action = value.get("action").and_then(serde_json::Value::as_str);
    if !action.is_some_and(|a| KNOWN_ACTIONS.contains(&a)) {
        return Err(DecodeError::InvalidAction);
    }

    serde_json::from_value::<WooRequest>(value).map_err(|e| DecodeError::Malformed(e.to_string()))
}

pub(super) async fn dispatch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, ShimError> {
    let request = decode_request(&body).map_err(|e| {
        tracing::warn!(request_id = req_id.0.as_str(), error = ?e, "rejected dispatcher request");
        e.into_shim_error()
    })?;

    let action = request.action();
    tracing::info!(request_id = req_id.0.as_str(), action, "dispatching WooCommerce action");

    let result = match request {
        WooRequest::Test { config } => state
            .woo
            .test_connection(&config)
            .await
            .map(|diagnostic| Json(diagnostic).into_response()),
        WooRequest::Fetch {
            config,
            limit,
            page,
        } => state
            .woo
            .fetch_products_page(
                &config,
                limit.unwrap_or(DEFAULT_FETCH_LIMIT),
                page.unwrap_or(1),
            )
            .await
            .map(|list| Json(list).into_response()),
        WooRequest::Update {
            config,
            product_id,
            product_data,
        } => state
            .woo
            .update_product(&config, &product_id.to_string(), &product_data)
            .await
            .map(|updated| Json(updated).into_response()),
    };

    result.map_err(|e| map_woo_error(&req_id.0, action, &e))
}

/// Every handler failure becomes a 500 with `{success: false, message}`.
fn map_woo_error(request_id: &str, action: &str, error: &WooError) -> ShimError {
    tracing::error!(request_id, action, error = %error, "WooCommerce action failed");
    ShimError::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_unknown_action() {
        let err = decode_request(br#"{"action": "delete", "config": {}}"#).unwrap_err();
        assert_eq!(err, DecodeError::InvalidAction);
    }

    #[test]
    fn decode_rejects_missing_action() {
        let err = decode_request(br#"{"config": {}}"#).unwrap_err();
        assert_eq!(err, DecodeError::InvalidAction);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        match decode_request(b"{not json").unwrap_err() {
            DecodeError::Malformed(message) => {
                assert!(message.starts_with("invalid JSON body"), "got: {message}");
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn decode_reports_missing_config_for_known_action() {
        match decode_request(br#"{"action": "test"}"#).unwrap_err() {
            DecodeError::Malformed(message) => {
                assert!(message.contains("config"), "got: {message}");
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn only_invalid_action_maps_to_400() {
        assert_eq!(
            DecodeError::InvalidAction.into_shim_error().status,
            StatusCode::BAD_REQUEST
        );
        let malformed = DecodeError::Malformed("missing field `config`".to_owned()).into_shim_error();
        assert_eq!(malformed.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(malformed.message, "missing field `config`");
    }

    #[test]
    fn decode_fetch_with_paging_and_ignored_endpoint() {
        let request = decode_request(
            br#"{
                "action": "fetch",
                "endpoint": "products",
                "limit": 25,
                "page": 2,
                "config": {"storeUrl": "shop.example.com", "consumerKey": "k", "consumerSecret": "s"}
            }"#,
        )
        .expect("valid fetch request");
        match request {
            WooRequest::Fetch { limit, page, .. } => {
                assert_eq!(limit, Some(25));
                assert_eq!(page, Some(2));
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn decode_update_accepts_numeric_and_string_ids() {
        for body in [
            br#"{"action": "update", "productId": 42, "productData": {"name": "x"}, "config": {"storeUrl": "s", "consumerKey": "k", "consumerSecret": "s"}}"#.as_slice(),
            br#"{"action": "update", "productId": "42", "productData": {"name": "x"}, "config": {"storeUrl": "s", "consumerKey": "k", "consumerSecret": "s"}}"#.as_slice(),
        ] {
            match decode_request(body).expect("valid update request") {
                WooRequest::Update {
                    product_id,
                    product_data,
                    ..
                } => {
                    assert_eq!(product_id.to_string(), "42");
                    assert_eq!(product_data["name"], "x");
                }
                other => panic!("expected update, got {other:?}"),
            }
        }
    }
}

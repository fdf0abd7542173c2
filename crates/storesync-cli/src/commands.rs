//! Action handlers for the CLI.
//!
//! Each handler produces the same JSON body the HTTP dispatcher would send,
//! so scripts can treat both surfaces alike.

use serde::Serialize;
use storesync_core::StoreConfig;
use storesync_woo::{WooClient, WooError};

use crate::Commands;

pub(crate) const DEFAULT_FETCH_LIMIT: u32 = 10;

/// A rendered action result plus whether the process should exit cleanly.
#[derive(Debug)]
pub(crate) struct Report {
    pub body: serde_json::Value,
    pub success: bool,
}

impl Report {
    fn from_result<T: Serialize>(
        action: &str,
        result: Result<T, WooError>,
        success: impl FnOnce(&T) -> bool,
    ) -> Self {
        match result {
            Ok(value) => {
                let success = success(&value);
                match serde_json::to_value(&value) {
                    Ok(body) => Self { body, success },
                    Err(e) => Self::failure(action, &e.to_string()),
                }
            }
            Err(e) => Self::failure(action, &e.to_string()),
        }
    }

    pub(crate) fn failure(action: &str, message: &str) -> Self {
        tracing::error!(action, message, "action failed");
        Self {
            body: serde_json::json!({ "success": false, "message": message }),
            success: false,
        }
    }
}

pub(crate) async fn run(client: &WooClient, store: &StoreConfig, command: Commands) -> Report {
    match command {
        Commands::Test => Report::from_result(
            "test",
            client.test_connection(store).await,
            |diagnostic| diagnostic.success,
        ),
        Commands::Fetch { limit, page } => Report::from_result(
            "fetch",
            client.fetch_products_page(store, limit, page).await,
            |_| true,
        ),
        Commands::Update { product_id, data } => Report::from_result(
            "update",
            client.update_product(store, &product_id, &data).await,
            |_| true,
        ),
    }
}

/// Parses `--data`, which must be a JSON object.
pub(crate) fn parse_product_data(raw: &str) -> Result<serde_json::Value, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("product data must be a JSON object".to_owned())
    }
}

//! Product listing and update calls.

use reqwest::Method;
use storesync_core::{ProductListResult, StoreConfig, UpdateResult};

use super::{StoreEndpoints, WooClient};
use crate::diagnostics::body_excerpt;
use crate::error::WooError;
use crate::normalize::{normalize_product, normalize_value};
use crate::pagination::PageTotals;
use crate::types::WooProduct;

impl WooClient {
    /// Fetches exactly one page of published products, newest first.
    ///
    /// `limit` is passed to the store as `per_page` unchanged; `page` is
    /// 1-based. Iterating over further pages is the caller's job, using the
    /// returned `total_pages`.
    ///
    /// # Errors
    ///
    /// - [`WooError::UnexpectedStatus`] for any non-2xx response, with the
    ///   first 200 characters of the body.
    /// - [`WooError::Http`] on network failure or timeout.
    /// - [`WooError::Deserialize`] if the body is not a JSON product array.
    pub async fn fetch_products_page(
        &self,
        config: &StoreConfig,
        limit: u32,
        page: u32,
    ) -> Result<ProductListResult, WooError> {
        let endpoints = StoreEndpoints::new(config);
        let response = self
            .authed(Method::GET, config, &endpoints.products(), self.timeouts.fetch)
            .query(&[
                ("per_page", limit.to_string()),
                ("page", page.to_string()),
                ("status", "publish".to_owned()),
                ("orderby", "date".to_owned()),
                ("order", "desc".to_owned()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                store_url = endpoints.root(),
                status = status.as_u16(),
                "product listing failed"
            );
            return Err(WooError::UnexpectedStatus {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        // Read the totals before consuming the response body.
        let totals = PageTotals::from_headers(response.headers());

        let body = response.text().await?;
        let products =
            serde_json::from_str::<Vec<WooProduct>>(&body).map_err(|e| WooError::Deserialize {
                context: format!("products page {page} from {}", endpoints.root()),
                source: e,
            })?;

        tracing::debug!(
            store_url = endpoints.root(),
            page,
            count = products.len(),
            total = totals.total,
            "fetched products page"
        );

        Ok(ProductListResult {
            success: true,
            total: totals.total,
            total_pages: totals.total_pages,
            current_page: page,
            products: products.into_iter().map(normalize_product).collect(),
        })
    }

    /// Sends `data` to `PUT .../products/{product_id}` as-is.
    ///
    /// The store's response body is returned verbatim in
    /// [`UpdateResult::product`], alongside a normalized view when the body
    /// parses as a product.
    ///
    /// # Errors
    ///
    /// - [`WooError::InvalidProductId`] unless `product_id` is a positive
    ///   decimal integer.
    /// - [`WooError::Remote`] for a non-2xx response with a JSON body; the
    ///   error displays the store's `message` field.
    /// - [`WooError::Deserialize`] if any response body is not JSON.
    /// - [`WooError::Http`] on network failure or timeout.
    pub async fn update_product(
        &self,
        config: &StoreConfig,
        product_id: &str,
        data: &serde_json::Value,
    ) -> Result<UpdateResult, WooError> {
        let product_id = validate_product_id(product_id)?;
        let endpoints = StoreEndpoints::new(config);

        let response = self
            .authed(
                Method::PUT,
                config,
                &endpoints.product(product_id),
                self.timeouts.update,
            )
            .json(data)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error_body =
                serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
                    WooError::Deserialize {
                        context: format!("error response for product {product_id}"),
                        source: e,
                    }
                })?;
            let message = error_body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(
                    || format!("Failed to update product (HTTP {})", status.as_u16()),
                    str::to_owned,
                );
            tracing::warn!(
                store_url = endpoints.root(),
                product_id,
                status = status.as_u16(),
                message = message.as_str(),
                "product update rejected"
            );
            return Err(WooError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let product = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            WooError::Deserialize {
                context: format!("updated product {product_id}"),
                source: e,
            }
        })?;
        let normalized = normalize_value(&product);

        tracing::info!(store_url = endpoints.root(), product_id, "product updated");

        Ok(UpdateResult {
            success: true,
            product,
            normalized,
        })
    }
}

/// Accepts only positive decimal IDs, so the value can be spliced into the
/// endpoint path.
fn validate_product_id(product_id: &str) -> Result<&str, WooError> {
    let trimmed = product_id.trim();
    let valid = !trimmed.is_empty()
        && trimmed.bytes().all(|b| b.is_ascii_digit())
        && trimmed.bytes().any(|b| b != b'0');
    if valid {
        Ok(trimmed)
    } else {
        Err(WooError::InvalidProductId(product_id.to_owned()))
    }
}

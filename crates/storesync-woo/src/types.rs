//! WooCommerce REST API response types.
//!
//! Only the fields the dashboard consumes are modelled. Everything except
//! `id` is optional: stores running older WooCommerce releases, or plugins
//! that rewrite product payloads, routinely omit fields or send `null`
//! where the docs promise a string. Defaults are applied in
//! [`crate::normalize`], not here.
//!
//! ### Prices
//! Decimal strings (`"19.90"`). `sale_price` is `""` when no sale is active.
//!
//! ### `stock_quantity`
//! `null` unless `manage_stock` is `true`.
//!
//! ### `variations`
//! Bare variation IDs on the parent product; the variation records live at
//! `/products/{id}/variations`.

use serde::Deserialize;

/// A product record from `GET /wp-json/{version}/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct WooProduct {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub regular_price: Option<String>,
    #[serde(default)]
    pub sale_price: Option<String>,
    #[serde(default)]
    pub on_sale: Option<bool>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default)]
    pub manage_stock: Option<bool>,
    #[serde(default)]
    pub images: Option<Vec<WooImage>>,
    #[serde(default)]
    pub categories: Option<Vec<WooTerm>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: Option<WooDimensions>,
    #[serde(default)]
    pub variations: Option<Vec<i64>>,
    #[serde(default)]
    pub attributes: Option<Vec<WooAttribute>>,
    #[serde(default)]
    pub tags: Option<Vec<WooTerm>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooImage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A category or tag reference embedded in a product.
#[derive(Debug, Clone, Deserialize)]
pub struct WooTerm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooDimensions {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WooAttribute {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

/// The REST discovery document served at `/wp-json/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRoot {
    /// Namespaces registered by core and plugins, e.g. `"wp/v2"`, `"wc/v3"`.
    #[serde(default)]
    pub namespaces: Vec<String>,
}

impl ApiRoot {
    #[must_use]
    pub fn declares(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|ns| ns == namespace)
    }
}

/// Subset of `GET /wp-json/{version}/system_status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub environment: Option<SystemEnvironment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemEnvironment {
    /// WooCommerce plugin version, e.g. `"8.5.1"`.
    #[serde(default)]
    pub version: Option<String>,
}

impl SystemStatus {
    #[must_use]
    pub fn woo_version(&self) -> Option<&str> {
        self.environment
            .as_ref()
            .and_then(|env| env.version.as_deref())
            .filter(|v| !v.is_empty())
    }
}

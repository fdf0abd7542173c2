//! Normalization from raw WooCommerce types to [`storesync_core::NormalizedProduct`].
//!
//! Every optional remote field gets an explicit default here, so the
//! dashboard never has to branch on `null`.

use storesync_core::{
    NormalizedProduct, ProductAttribute, ProductCategory, ProductDimensions, ProductImage,
};

use crate::types::{WooAttribute, WooDimensions, WooImage, WooProduct, WooTerm};

/// Normalizes a raw [`WooProduct`] into a [`NormalizedProduct`].
///
/// A missing or empty SKU becomes `"woo-{id}"` so every product carries a
/// stable key for matching against the local catalogue.
#[must_use]
pub fn normalize_product(product: WooProduct) -> NormalizedProduct {
    let sku = product
        .sku
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("woo-{}", product.id));

    NormalizedProduct {
        id: product.id,
        name: product.name.unwrap_or_default(),
        slug: product.slug.unwrap_or_default(),
        permalink: product.permalink.unwrap_or_default(),
        sku,
        status: product.status.unwrap_or_else(|| "publish".to_string()),
        product_type: product.product_type.unwrap_or_else(|| "simple".to_string()),
        price: product.price.unwrap_or_default(),
        regular_price: product.regular_price.unwrap_or_default(),
        sale_price: product.sale_price.unwrap_or_default(),
        on_sale: product.on_sale.unwrap_or(false),
        stock_quantity: product.stock_quantity.unwrap_or(0),
        stock_status: product
            .stock_status
            .unwrap_or_else(|| "instock".to_string()),
        manage_stock: product.manage_stock.unwrap_or(false),
        images: product
            .images
            .unwrap_or_default()
            .into_iter()
            .map(normalize_image)
            .collect(),
        categories: product
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(normalize_category)
            .collect(),
        description: product.description.unwrap_or_default(),
        short_description: product.short_description.unwrap_or_default(),
        weight: product.weight.unwrap_or_default(),
        dimensions: product
            .dimensions
            .map(normalize_dimensions)
            .unwrap_or_default(),
        variations: product.variations.unwrap_or_default(),
        attributes: product
            .attributes
            .unwrap_or_default()
            .into_iter()
            .map(normalize_attribute)
            .collect(),
        tags: product
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| t.name)
            .collect(),
    }
}

/// Best-effort normalization of an arbitrary JSON value.
///
/// Returns `None` when the value does not deserialize as a [`WooProduct`].
#[must_use]
pub fn normalize_value(value: &serde_json::Value) -> Option<NormalizedProduct> {
    serde_json::from_value::<WooProduct>(value.clone())
        .ok()
        .map(normalize_product)
}

fn normalize_image(image: WooImage) -> ProductImage {
    ProductImage {
        id: image.id.unwrap_or(0),
        src: image.src.unwrap_or_default(),
        alt: image.alt.unwrap_or_default(),
    }
}

fn normalize_category(term: WooTerm) -> ProductCategory {
    ProductCategory {
        id: term.id.unwrap_or(0),
        name: term.name.unwrap_or_default(),
        slug: term.slug.unwrap_or_default(),
    }
}

fn normalize_dimensions(dimensions: WooDimensions) -> ProductDimensions {
    ProductDimensions {
        length: dimensions.length.unwrap_or_default(),
        width: dimensions.width.unwrap_or_default(),
        height: dimensions.height.unwrap_or_default(),
    }
}

fn normalize_attribute(attribute: WooAttribute) -> ProductAttribute {
    ProductAttribute {
        name: attribute.name.unwrap_or_default(),
        options: attribute.options.unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// A WooCommerce product translated into the dashboard's internal shape.
///
/// Every optional remote field has a concrete default so consumers never
/// see `null` for strings or lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedProduct {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub permalink: String,
    /// Remote SKU, or `"woo-{id}"` when the store has none.
    pub sku: String,
    /// `"publish"`, `"draft"`, `"pending"` or `"private"`.
    pub status: String,
    /// `"simple"`, `"variable"`, `"grouped"` or `"external"`.
    pub product_type: String,
    /// Current price as a decimal string, exactly as WooCommerce returns it.
    pub price: String,
    pub regular_price: String,
    /// Empty when the product is not on sale.
    pub sale_price: String,
    pub on_sale: bool,
    pub stock_quantity: i64,
    pub stock_status: String,
    pub manage_stock: bool,
    pub images: Vec<ProductImage>,
    pub categories: Vec<ProductCategory>,
    /// Raw HTML.
    pub description: String,
    pub short_description: String,
    pub weight: String,
    pub dimensions: ProductDimensions,
    /// Variation product IDs; empty for simple products.
    pub variations: Vec<i64>,
    pub attributes: Vec<ProductAttribute>,
    /// Tag names.
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    pub id: i64,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Physical dimensions as decimal strings in the store's configured unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductAttribute {
    pub name: String,
    pub options: Vec<String>,
}

/// One page of normalized products plus the store's pagination totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListResult {
    pub success: bool,
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub products: Vec<NormalizedProduct>,
}

/// Result of a product update.
///
/// `product` is the store's response body, untouched. `normalized` is the
/// same record run through product normalization when it parses as one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateResult {
    pub success: bool,
    pub product: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(images: Vec<ProductImage>, stock_status: &str) -> NormalizedProduct {
        NormalizedProduct {
            id: 42,
            name: "Ceramic Mug".to_string(),
            slug: "ceramic-mug".to_string(),
            permalink: "https://shop.example.com/product/ceramic-mug".to_string(),
            sku: "MUG-001".to_string(),
            status: "publish".to_string(),
            product_type: "simple".to_string(),
            price: "19.90".to_string(),
            regular_price: "24.90".to_string(),
            sale_price: "19.90".to_string(),
            on_sale: true,
            stock_quantity: 7,
            stock_status: stock_status.to_string(),
            manage_stock: true,
            images,
            categories: vec![],
            description: String::new(),
            short_description: String::new(),
            weight: "0.4".to_string(),
            dimensions: ProductDimensions::default(),
            variations: vec![],
            attributes: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn normalized_product_serializes_snake_case_fields() {
        let product = make_product(
            vec![ProductImage {
                id: 1,
                src: "https://cdn.example.com/a.jpg".to_string(),
                alt: String::new(),
            }],
            "outofstock",
        );
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["product_type"], "simple");
        assert_eq!(json["regular_price"], "24.90");
        assert_eq!(json["stock_status"], "outofstock");
        assert_eq!(json["images"][0]["src"], "https://cdn.example.com/a.jpg");
        assert_eq!(json["dimensions"]["length"], "");
    }

    #[test]
    fn update_result_omits_missing_normalized_view() {
        let result = UpdateResult {
            success: true,
            product: serde_json::json!({"id": 1}),
            normalized: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["product"]["id"], 1);
        assert!(json.get("normalized").is_none());
    }
}

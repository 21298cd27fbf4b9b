//! Catalog product model.

use serde::{Deserialize, Serialize};

use crate::types::{Brand, Money, ProductId};

/// A catalog product.
///
/// Owned by the admin catalog; deep-cloned into each new reseller's
/// private stock at creation time, after which the copies evolve
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Long-form description.
    #[serde(default)]
    pub long_description: String,
    /// Unit price, non-negative.
    pub price: Money,
    /// Brand the product belongs to.
    #[serde(default)]
    pub brand: Brand,
    /// Free-form category label.
    #[serde(default = "Product::default_category")]
    pub category: String,
    /// Image reference (path or data URI).
    #[serde(default = "Product::default_image")]
    pub image: String,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Whether the product is visible in the storefront.
    #[serde(default = "Product::default_active")]
    pub active: bool,
}

impl Product {
    pub(crate) fn default_category() -> String {
        "Todos".to_owned()
    }

    pub(crate) fn default_image() -> String {
        "/images/placeholder.jpg".to_owned()
    }

    pub(crate) const fn default_active() -> bool {
        true
    }

    /// Whether at least one unit is on hand.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Value of the units on hand at the current price.
    #[must_use]
    pub fn stock_value(&self) -> Money {
        self.price * self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_legacy_minimal_shape() {
        // Old blobs may carry only the required fields.
        let json = r#"{"id":"P-1","name":"Creatina","price":500}"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.category, "Todos");
        assert_eq!(product.image, "/images/placeholder.jpg");
        assert!(product.active);
        assert_eq!(product.stock, 0);
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_stock_value() {
        let json = r#"{"id":"P-1","name":"Creatina","price":500,"stock":4}"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.stock_value(), Money::from_units(2000));
        assert!(product.is_in_stock());
    }
}

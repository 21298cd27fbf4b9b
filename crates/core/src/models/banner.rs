//! Promotional banners, bundles, and social reviews.

use serde::{Deserialize, Serialize};

use crate::types::{BannerId, Brand, BundleEntryId, ProductId, ReviewBrand, ReviewId};

/// One product in a banner's discount bundle.
///
/// `product_id` is a weak reference resolved at render time; entries carry
/// their own stable ID so removal works by identity, not list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    /// Stable entry ID.
    #[serde(default = "BundleEntryId::generate")]
    pub id: BundleEntryId,
    /// Referenced product; may dangle if the product was later deleted.
    pub product_id: ProductId,
    /// Quantity the bundle requires.
    pub quantity: u32,
    /// Discount applied to this entry, if any.
    #[serde(default)]
    pub discount_percentage: Option<u32>,
}

/// A promotional banner, optionally carrying a product bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Unique banner ID.
    pub id: BannerId,
    /// Headline.
    pub title: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: String,
    /// Image reference (path or data URI).
    #[serde(default = "Banner::default_image")]
    pub image: String,
    /// Brand the banner belongs to.
    #[serde(default)]
    pub brand: Brand,
    /// Whether the banner is currently shown.
    #[serde(default = "Banner::default_active")]
    pub active: bool,
    /// Headline discount percentage.
    #[serde(default)]
    pub discount_percentage: u32,
    /// Bundle of referenced products.
    #[serde(default)]
    pub related_products: Vec<BundleEntry>,
}

impl Banner {
    pub(crate) fn default_image() -> String {
        "/images/placeholder-banner.jpg".to_owned()
    }

    pub(crate) const fn default_active() -> bool {
        true
    }
}

/// A social proof screenshot shown in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialReview {
    /// Unique review ID.
    pub id: ReviewId,
    /// Screenshot URL or data URI.
    pub image_url: String,
    /// Brand scope; `both` applies everywhere.
    #[serde(default)]
    pub brand: ReviewBrand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_bundle_entries_get_generated_ids() {
        // Old blobs stored bundle entries without their own ID.
        let json = r#"{
            "id":"B-1","title":"Combo Fuerza",
            "relatedProducts":[
                {"productId":"P-1","quantity":2},
                {"productId":"P-2","quantity":1,"discountPercentage":15}
            ]
        }"#;
        let banner: Banner = serde_json::from_str(json).expect("deserialize");
        assert_eq!(banner.related_products.len(), 2);
        let first = banner.related_products.first().expect("entry");
        let second = banner.related_products.get(1).expect("entry");
        assert_ne!(first.id, second.id);
        assert_eq!(second.discount_percentage, Some(15));
    }

    #[test]
    fn test_banner_defaults() {
        let json = r#"{"id":"B-1","title":"Promo"}"#;
        let banner: Banner = serde_json::from_str(json).expect("deserialize");
        assert!(banner.active);
        assert_eq!(banner.image, "/images/placeholder-banner.jpg");
        assert_eq!(banner.discount_percentage, 0);
        assert!(banner.related_products.is_empty());
    }
}

//! Canonical storage keys.
//!
//! One key per top-level collection. The names predate this
//! implementation and are part of the persisted layout; do not rename.

/// Catalog products.
pub const PRODUCTS: &str = "products";
/// Reseller accounts (including their private sub-state).
pub const RESELLERS: &str = "resellers";
/// The admin's global client directory.
pub const ADMIN_CLIENTS: &str = "adminClients";
/// Promotional banners.
pub const BANNERS: &str = "banners";
/// Social proof screenshots.
pub const SOCIAL_REVIEWS: &str = "socialReviews";
/// Contact details singleton.
pub const CONTACT_INFO: &str = "contactInfo";
/// Payment configuration singleton.
pub const PAYMENT_CONFIG: &str = "paymentConfig";
/// Site content singleton.
pub const SITE_CONTENT: &str = "siteContent";

/// Every key, in load order.
pub const ALL: &[&str] = &[
    PRODUCTS,
    RESELLERS,
    ADMIN_CLIENTS,
    BANNERS,
    SOCIAL_REVIEWS,
    CONTACT_INFO,
    PAYMENT_CONFIG,
    SITE_CONTENT,
];

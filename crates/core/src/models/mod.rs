//! Persisted domain entities.
//!
//! Every model serializes with camelCase field names because that is the
//! layout the persisted blobs have always used. Fields that older blobs
//! may lack carry `#[serde(default)]` so a reload falls back to defaults
//! instead of failing.

pub mod banner;
pub mod client;
pub mod product;
pub mod reseller;
pub mod site;

pub use banner::{Banner, BundleEntry, SocialReview};
pub use client::Client;
pub use product::Product;
pub use reseller::{LineItem, Message, Reseller, ResellerOrder, Sale};
pub use site::{ContactInfo, PaymentConfig, SiteContent, TransferConfig};

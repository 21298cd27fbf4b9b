//! Revendo Admin - administration console services.
//!
//! Narrow mutation operations over the shared [`Domain`] state: catalog,
//! reseller, client, banner, and review CRUD; the order-status workflow;
//! admin-reseller messaging; site configuration; and login. Each service
//! borrows the domain and the store, validates at the boundary, and
//! persists the collection it touched.
//!
//! [`Domain`]: revendo_store::Domain

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
mod error;
pub mod services;

pub use config::{AdminConfig, ConfigError};
pub use error::AdminError;
pub use services::auth::{AuthError, AuthService, LoginOutcome};
pub use services::banners::{BannerDraft, BannerService, ResolvedBundleEntry};
pub use services::catalog::{CatalogService, ProductDraft};
pub use services::clients::{ClientDirectoryService, ClientDraft};
pub use services::messaging::MessagingService;
pub use services::orders::{FlattenedOrder, OrderService};
pub use services::resellers::{ResellerDraft, ResellerService};
pub use services::reviews::ReviewService;
pub use services::site::SiteConfigService;

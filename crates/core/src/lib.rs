//! Revendo Core - Shared types and domain models.
//!
//! This crate provides the common vocabulary used across all Revendo
//! components:
//! - `store` - File-backed persistent state
//! - `admin` - Administration console services
//! - `reseller` - Reseller portal services
//! - `cli` - Command-line tools for seeding and maintenance
//!
//! # Architecture
//!
//! The core crate contains only types and models - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails,
//!   credentials, and statuses
//! - [`models`] - The persisted domain entities (products, resellers,
//!   sales, orders, messages, banners, site configuration)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;

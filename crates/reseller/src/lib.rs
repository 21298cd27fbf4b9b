//! Revendo Reseller - reseller portal services.
//!
//! A [`Portal`] is a view over one reseller's private sub-state (cloned
//! stock, clients, sales, restock orders, messages, loyalty points)
//! inside the shared domain. Its centerpiece is the sale-recording
//! workflow: build a [`Cart`] against the private stock, pick a client,
//! and confirm - which snapshots the sale, decrements stock, accrues
//! points, and persists.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
mod error;
pub mod portal;

pub use cart::{Cart, CartError};
pub use error::PortalError;
pub use portal::{ClientDraft, Portal};

//! Admin console services.
//!
//! Each service is a short-lived borrow over the domain state and the
//! store: construct it, perform one or more operations, drop it. Every
//! mutation validates at the boundary, applies a whole-collection
//! replacement, and persists the collection it touched.

pub mod auth;
pub mod banners;
pub mod catalog;
pub mod clients;
pub mod messaging;
pub mod orders;
pub mod resellers;
pub mod reviews;
pub mod site;

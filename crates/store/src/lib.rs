//! Revendo Store - file-backed persistent state.
//!
//! The whole system's state lives in a data directory holding one JSON
//! file per top-level collection (see [`keys`]). [`JsonStore`] is the
//! key-value layer: load-with-default and best-effort save, never
//! surfacing storage failures to callers that don't ask for them.
//! [`Domain`] aggregates every collection into the in-memory state the
//! admin console and reseller portal mutate.
//!
//! Stored files carry a versioned envelope (`{"schema": N, "data": ...}`);
//! legacy bare blobs are treated as schema 0 and migrated on load. See
//! [`schema`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod domain;
mod error;
mod json_store;
pub mod keys;
pub mod schema;

pub use domain::Domain;
pub use error::StoreError;
pub use json_store::JsonStore;

//! Unified error handling for admin services.

use revendo_core::OrderStatus;
use revendo_store::StoreError;
use thiserror::Error;

/// Application-level error type for the admin console.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A required field is missing or a field value is invalid.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An entity with the same unique key already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Order status may only move one step forward.
    #[error("invalid order transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// Orders may only be deleted once delivered.
    #[error("order cannot be deleted while {0}")]
    OrderNotDeletable(OrderStatus),

    /// Storage operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

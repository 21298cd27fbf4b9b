//! Portal error types.

use revendo_core::{ClientId, ProductId, ResellerId};
use revendo_store::StoreError;
use thiserror::Error;

/// Errors from reseller portal operations.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The portal's reseller no longer exists in the domain.
    #[error("unknown reseller: {0}")]
    UnknownReseller(ResellerId),

    /// A sale needs at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// The selected client does not belong to this reseller.
    #[error("unknown client: {0}")]
    UnknownClient(ClientId),

    /// A referenced product is not in this reseller's stock.
    #[error("product not in stock list: {0}")]
    UnknownProduct(ProductId),

    /// A cart line asks for more units than are on hand.
    #[error("insufficient stock for {product_id}: requested {requested}, on hand {on_hand}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        on_hand: u32,
    },

    /// A required field is missing or invalid.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Storage operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

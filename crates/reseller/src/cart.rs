//! Sale cart building.
//!
//! A cart holds product snapshots (name and price at add time) with
//! quantities bounded by the reseller's current stock. Zero-stock
//! products cannot be added at all; repeated adds bump the quantity up
//! to the stock cap.

use revendo_core::{LineItem, Money, Product, ProductId};
use thiserror::Error;

/// Errors from cart building.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product has no units on hand.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// The line already holds every unit on hand.
    #[error("only {on_hand} units of {product_id} are on hand")]
    StockCapReached {
        product_id: ProductId,
        on_hand: u32,
    },
}

/// An in-progress sale cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, snapshotting its name and price.
    ///
    /// # Errors
    ///
    /// - [`CartError::OutOfStock`] if the product has no units on hand.
    /// - [`CartError::StockCapReached`] if the line already holds every
    ///   unit on hand.
    pub fn add(&mut self, product: &Product) -> Result<(), CartError> {
        if product.stock == 0 {
            return Err(CartError::OutOfStock(product.id.clone()));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity >= product.stock {
                return Err(CartError::StockCapReached {
                    product_id: product.id.clone(),
                    on_hand: product.stock,
                });
            }
            line.quantity += 1;
            return Ok(());
        }
        self.lines.push(LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        });
        Ok(())
    }

    /// Drop the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cart's lines.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of line totals.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::total).sum()
    }

    /// Consume the cart into its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<LineItem> {
        self.lines
    }
}

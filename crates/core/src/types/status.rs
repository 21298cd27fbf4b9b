//! Status and category enums for domain entities.
//!
//! Serialized representations keep the labels the persisted layout has
//! always used (Spanish status and payment-method names, lowercase brand
//! slugs), so existing blobs stay readable.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Restock order status, strictly forward-moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Placed by the reseller, not yet dispatched.
    #[default]
    Pendiente,
    /// Dispatched by the admin, in transit.
    #[serde(rename = "En Camino")]
    EnCamino,
    /// Delivered. Terminal; the only state an order may be deleted from.
    Entregado,
}

impl OrderStatus {
    /// The next state in the lifecycle, or `None` from the terminal state.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pendiente => Some(Self::EnCamino),
            Self::EnCamino => Some(Self::Entregado),
            Self::Entregado => None,
        }
    }

    /// Whether `target` is the single legal forward step from this state.
    ///
    /// Backward moves and skips (`Pendiente` directly to `Entregado`) are
    /// never legal.
    #[must_use]
    pub fn can_advance_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    /// Whether the order has reached its terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Entregado)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pendiente => "Pendiente",
            Self::EnCamino => "En Camino",
            Self::Entregado => "Entregado",
        };
        f.write_str(label)
    }
}

/// Product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Informa,
    Phisis,
    Iqual,
    Biofarma,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Informa => "informa",
            Self::Phisis => "phisis",
            Self::Iqual => "iqual",
            Self::Biofarma => "biofarma",
        };
        f.write_str(label)
    }
}

/// Brand scope for social reviews; `Both` shows the review on every brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewBrand {
    Informa,
    Phisis,
    Iqual,
    Biofarma,
    #[default]
    Both,
}

impl ReviewBrand {
    /// Whether a review scoped to `self` applies to `brand`.
    #[must_use]
    pub fn applies_to(self, brand: Brand) -> bool {
        match self {
            Self::Both => true,
            Self::Informa => brand == Brand::Informa,
            Self::Phisis => brand == Brand::Phisis,
            Self::Iqual => brand == Brand::Iqual,
            Self::Biofarma => brand == Brand::Biofarma,
        }
    }
}

/// Client payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Transferencia,
    Tarjeta,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Efectivo => "Efectivo",
            Self::Transferencia => "Transferencia",
            Self::Tarjeta => "Tarjeta",
        };
        f.write_str(label)
    }
}

/// Who authored a message in an admin-reseller thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Admin,
    Reseller,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_forward_steps() {
        assert!(OrderStatus::Pendiente.can_advance_to(OrderStatus::EnCamino));
        assert!(OrderStatus::EnCamino.can_advance_to(OrderStatus::Entregado));
    }

    #[test]
    fn test_order_status_rejects_skip_and_regression() {
        assert!(!OrderStatus::Pendiente.can_advance_to(OrderStatus::Entregado));
        assert!(!OrderStatus::EnCamino.can_advance_to(OrderStatus::Pendiente));
        assert!(!OrderStatus::Entregado.can_advance_to(OrderStatus::EnCamino));
        assert!(!OrderStatus::Entregado.can_advance_to(OrderStatus::Pendiente));
    }

    #[test]
    fn test_order_status_serialized_labels() {
        let json = serde_json::to_string(&OrderStatus::EnCamino).expect("serialize");
        assert_eq!(json, "\"En Camino\"");
        let back: OrderStatus = serde_json::from_str("\"Pendiente\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Pendiente);
    }

    #[test]
    fn test_brand_serialized_lowercase() {
        let json = serde_json::to_string(&Brand::Biofarma).expect("serialize");
        assert_eq!(json, "\"biofarma\"");
    }

    #[test]
    fn test_review_brand_both_applies_everywhere() {
        assert!(ReviewBrand::Both.applies_to(Brand::Informa));
        assert!(ReviewBrand::Both.applies_to(Brand::Iqual));
        assert!(ReviewBrand::Phisis.applies_to(Brand::Phisis));
        assert!(!ReviewBrand::Phisis.applies_to(Brand::Informa));
    }

    #[test]
    fn test_message_sender_labels() {
        assert_eq!(
            serde_json::to_string(&MessageSender::Admin).expect("serialize"),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&MessageSender::Reseller).expect("serialize"),
            "\"reseller\""
        );
    }
}

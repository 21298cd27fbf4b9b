//! Reseller account and its private sub-state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Client, Product};
use crate::types::{
    Email, MessageId, MessageSender, Money, OrderId, OrderStatus, PasswordHash, PaymentMethod,
    ProductId, ResellerId, SaleId,
};

/// One line of a sale or restock order: a snapshot of the product at the
/// time the cart was built, not a live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Product name at snapshot time.
    pub name: String,
    /// Unit price at snapshot time.
    pub price: Money,
    /// Units sold or ordered.
    pub quantity: u32,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Money {
        self.price * self.quantity
    }
}

/// An immutable record of a completed sale.
///
/// Stored newest-first in [`Reseller::sales`]. The client name is a
/// denormalized snapshot so later client edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique sale ID.
    pub id: SaleId,
    /// Client the sale was made to.
    pub client_id: crate::types::ClientId,
    /// Client name at sale time.
    pub client_name: String,
    /// Date the sale was recorded.
    pub date: NaiveDate,
    /// Cart snapshot.
    pub items: Vec<LineItem>,
    /// Sum of line totals.
    pub total: Money,
    /// Payment method taken from the client's preference at sale time.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// A restock order a reseller placed with the admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResellerOrder {
    /// Unique order ID.
    pub id: OrderId,
    /// Date the order was placed.
    pub date: NaiveDate,
    /// Ordered items.
    pub items: Vec<LineItem>,
    /// Sum of line totals.
    pub total: Money,
    /// Lifecycle state, strictly forward-moving.
    #[serde(default)]
    pub status: OrderStatus,
}

/// A message in the admin-reseller thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID.
    pub id: MessageId,
    /// Who authored the message.
    pub sender: MessageSender,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
    /// Read flag; only meaningful for reseller-authored messages, which
    /// the admin marks read in bulk when opening the thread.
    #[serde(default)]
    pub read: bool,
}

/// A reseller (partner) account with its own cloned stock, client list,
/// and sales ledger.
///
/// The private `stock` is a deep copy of the catalog taken at creation
/// time; the reseller manages those counts independently afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reseller {
    /// Unique reseller ID.
    pub id: ResellerId,
    /// Display name.
    pub name: String,
    /// Login email, unique case-insensitively.
    pub email: Email,
    /// bcrypt hash of the login password.
    pub password_hash: PasswordHash,
    /// Sales region label.
    #[serde(default = "Reseller::default_region")]
    pub region: String,
    /// Inactive resellers cannot log in.
    #[serde(default = "Reseller::default_active")]
    pub active: bool,
    /// Private product stock (catalog clone).
    #[serde(default)]
    pub stock: Vec<Product>,
    /// The reseller's own clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Restock orders placed with the admin.
    #[serde(default)]
    pub orders: Vec<ResellerOrder>,
    /// Admin-reseller message thread, append-only.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Sales ledger, newest first.
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// Loyalty points, accrual-only.
    #[serde(default)]
    pub points: u64,
}

impl Reseller {
    pub(crate) fn default_region() -> String {
        "General".to_owned()
    }

    pub(crate) const fn default_active() -> bool {
        true
    }

    /// Count of unread reseller-authored messages in this thread.
    #[must_use]
    pub fn unread_from_reseller(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == MessageSender::Reseller && !m.read)
            .count()
    }

    /// Total revenue across the sales ledger.
    #[must_use]
    pub fn revenue_total(&self) -> Money {
        self.sales.iter().map(|s| s.total).sum()
    }

    /// Look up one of the reseller's own clients.
    #[must_use]
    pub fn client(&self, id: &crate::types::ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }

    /// Look up a product in the private stock.
    #[must_use]
    pub fn stock_item(&self, id: &ProductId) -> Option<&Product> {
        self.stock.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientId;

    fn reseller_json(messages: &str) -> String {
        format!(
            r#"{{"id":"R-1","name":"Juana","email":"juana@tienda.com",
              "passwordHash":"$2b$12$abcdefghijklmnopqrstuv","messages":{messages}}}"#
        )
    }

    #[test]
    fn test_deserializes_minimal_shape_with_defaults() {
        let reseller: Reseller =
            serde_json::from_str(&reseller_json("[]")).expect("deserialize");
        assert_eq!(reseller.region, "General");
        assert!(reseller.active);
        assert_eq!(reseller.points, 0);
        assert!(reseller.sales.is_empty());
        assert_eq!(reseller.revenue_total(), Money::ZERO);
    }

    #[test]
    fn test_unread_counts_only_reseller_messages() {
        let messages = r#"[
            {"id":"M-1","sender":"reseller","content":"hola","timestamp":"2024-05-01T10:00:00Z","read":false},
            {"id":"M-2","sender":"reseller","content":"stock?","timestamp":"2024-05-01T10:05:00Z","read":true},
            {"id":"M-3","sender":"admin","content":"ya sale","timestamp":"2024-05-01T10:10:00Z","read":false}
        ]"#;
        let reseller: Reseller =
            serde_json::from_str(&reseller_json(messages)).expect("deserialize");
        assert_eq!(reseller.unread_from_reseller(), 1);
    }

    #[test]
    fn test_client_lookup() {
        let mut reseller: Reseller =
            serde_json::from_str(&reseller_json("[]")).expect("deserialize");
        reseller.clients.push(Client {
            id: ClientId::new("C-1"),
            name: "Carlos".to_owned(),
            phone: String::new(),
            address: String::new(),
            payment_method: PaymentMethod::Efectivo,
            current_account_balance: Money::ZERO,
            last_order_date: None,
        });
        assert!(reseller.client(&ClientId::new("C-1")).is_some());
        assert!(reseller.client(&ClientId::new("C-2")).is_none());
    }

    #[test]
    fn test_line_item_total() {
        let line = LineItem {
            product_id: ProductId::new("P-1"),
            name: "Creatina".to_owned(),
            price: Money::from_units(500),
            quantity: 3,
        };
        assert_eq!(line.total(), Money::from_units(1500));
    }
}

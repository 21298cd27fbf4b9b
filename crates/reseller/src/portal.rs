//! The reseller's scoped view over its own sub-state.

use chrono::{NaiveDate, Utc};

use revendo_core::{
    Client, ClientId, LineItem, Message, MessageId, MessageSender, Money, OrderId, PaymentMethod,
    Product, ProductId, Reseller, ResellerId, ResellerOrder, Sale, SaleId,
};
use revendo_store::{Domain, JsonStore};

use crate::cart::Cart;
use crate::error::PortalError;

/// An in-progress edit of one of the reseller's own clients.
#[derive(Debug, Clone, Default)]
pub struct ClientDraft {
    /// Existing client ID when editing; `None` creates a new client.
    pub id: Option<ClientId>,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
}

/// A view over one reseller's private sub-state.
///
/// Every mutation re-persists the resellers collection; the rest of the
/// domain is untouched.
pub struct Portal<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
    reseller_id: ResellerId,
}

impl<'a> Portal<'a> {
    /// Open a portal for `reseller_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownReseller`] if no such account
    /// exists.
    pub fn open(
        domain: &'a mut Domain,
        store: &'a JsonStore,
        reseller_id: ResellerId,
    ) -> Result<Self, PortalError> {
        if domain.reseller(&reseller_id).is_none() {
            return Err(PortalError::UnknownReseller(reseller_id));
        }
        Ok(Self {
            domain,
            store,
            reseller_id,
        })
    }

    /// The reseller record this portal is scoped to.
    #[must_use]
    pub fn me(&self) -> &Reseller {
        // Checked at open; the portal holds the domain exclusively.
        self.domain
            .reseller(&self.reseller_id)
            .unwrap_or_else(|| unreachable!("reseller checked at open"))
    }

    fn me_mut(&mut self) -> &mut Reseller {
        self.domain
            .reseller_mut(&self.reseller_id)
            .unwrap_or_else(|| unreachable!("reseller checked at open"))
    }

    /// The private stock, filtered by a case-insensitive name search.
    #[must_use]
    pub fn search_stock(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.me()
            .stock
            .iter()
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Total revenue across the sales ledger.
    #[must_use]
    pub fn revenue_total(&self) -> Money {
        self.me().revenue_total()
    }

    /// Overwrite the on-hand count for one stocked product.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownProduct`] if the product is not in
    /// this reseller's stock list.
    pub fn set_stock_count(
        &mut self,
        product_id: &ProductId,
        count: u32,
    ) -> Result<(), PortalError> {
        let me = self.me_mut();
        let product = me
            .stock
            .iter_mut()
            .find(|p| &p.id == product_id)
            .ok_or_else(|| PortalError::UnknownProduct(product_id.clone()))?;
        product.stock = count;
        self.domain.persist_resellers(self.store);
        Ok(())
    }

    /// Validate a draft and replace-or-append it in the reseller's own
    /// client list.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Validation`] for a blank name.
    pub fn save_client(&mut self, draft: ClientDraft) -> Result<ClientId, PortalError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(PortalError::Validation("client name is required".into()));
        }
        let client = Client {
            id: draft.id.unwrap_or_else(ClientId::generate),
            name: name.to_owned(),
            phone: draft.phone,
            address: draft.address,
            payment_method: draft.payment_method,
            current_account_balance: Money::ZERO,
            last_order_date: None,
        };
        let id = client.id.clone();
        let me = self.me_mut();
        match me.clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => {
                // Balance and order history are portal-managed, not
                // draft-editable.
                existing.name = client.name;
                existing.phone = client.phone;
                existing.address = client.address;
                existing.payment_method = client.payment_method;
            }
            None => me.clients.push(client),
        }
        self.domain.persist_resellers(self.store);
        Ok(id)
    }

    /// Append a reseller-authored message to the admin thread.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Validation`] for blank content.
    pub fn send_message(&mut self, content: &str) -> Result<MessageId, PortalError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(PortalError::Validation("message content is required".into()));
        }
        let message = Message {
            id: MessageId::generate(),
            sender: MessageSender::Reseller,
            content: content.to_owned(),
            timestamp: Utc::now(),
            read: false,
        };
        let id = message.id.clone();
        self.me_mut().messages.push(message);
        self.domain.persist_resellers(self.store);
        Ok(id)
    }

    /// Record a sale: snapshot the cart against `client_id`, decrement
    /// the private stock, accrue loyalty points, and prepend the sale to
    /// the ledger.
    ///
    /// The whole operation validates before mutating, so a failure
    /// leaves the reseller untouched.
    ///
    /// # Errors
    ///
    /// - [`PortalError::EmptyCart`] for a cart with no lines.
    /// - [`PortalError::UnknownClient`] if the client does not belong to
    ///   this reseller.
    /// - [`PortalError::UnknownProduct`] /
    ///   [`PortalError::InsufficientStock`] if a line no longer fits the
    ///   current stock.
    pub fn record_sale(&mut self, cart: Cart, client_id: &ClientId) -> Result<SaleId, PortalError> {
        if cart.is_empty() {
            return Err(PortalError::EmptyCart);
        }

        let me = self.me();
        let client = me
            .client(client_id)
            .ok_or_else(|| PortalError::UnknownClient(client_id.clone()))?;
        let client_name = client.name.clone();
        let payment_method = client.payment_method;

        for line in cart.lines() {
            let on_hand = me
                .stock_item(&line.product_id)
                .ok_or_else(|| PortalError::UnknownProduct(line.product_id.clone()))?
                .stock;
            if line.quantity > on_hand {
                return Err(PortalError::InsufficientStock {
                    product_id: line.product_id.clone(),
                    requested: line.quantity,
                    on_hand,
                });
            }
        }

        let total = cart.total();
        let earned = total.loyalty_points();
        let sale = Sale {
            id: SaleId::generate(),
            client_id: client_id.clone(),
            client_name,
            date: Utc::now().date_naive(),
            items: cart.into_lines(),
            total,
            payment_method,
        };
        let sale_id = sale.id.clone();

        let me = self.me_mut();
        for line in &sale.items {
            if let Some(product) = me.stock.iter_mut().find(|p| p.id == line.product_id) {
                product.stock -= line.quantity;
            }
        }
        me.points += earned;
        if let Some(client) = me.clients.iter_mut().find(|c| &c.id == client_id) {
            client.last_order_date = Some(sale.date);
        }
        me.sales.insert(0, sale);
        self.domain.persist_resellers(self.store);
        tracing::info!(reseller = %self.reseller_id, %sale_id, %total, earned, "sale recorded");
        Ok(sale_id)
    }

    /// Place a restock order with the admin from catalog line items.
    ///
    /// The order starts `Pendiente`; only the admin moves it forward.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::EmptyCart`] for an empty item list, or
    /// [`PortalError::Validation`] for a zero quantity.
    pub fn place_restock_order(
        &mut self,
        items: Vec<LineItem>,
        date: NaiveDate,
    ) -> Result<OrderId, PortalError> {
        if items.is_empty() {
            return Err(PortalError::EmptyCart);
        }
        if items.iter().any(|l| l.quantity == 0) {
            return Err(PortalError::Validation(
                "order line quantity must be at least 1".into(),
            ));
        }
        let total = items.iter().map(LineItem::total).sum();
        let order = ResellerOrder {
            id: OrderId::generate(),
            date,
            items,
            total,
            status: revendo_core::OrderStatus::Pendiente,
        };
        let id = order.id.clone();
        self.me_mut().orders.push(order);
        self.domain.persist_resellers(self.store);
        Ok(id)
    }
}

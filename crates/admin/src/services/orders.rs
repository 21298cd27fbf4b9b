//! Restock order workflow.
//!
//! Orders live inside each reseller's private sub-state; the admin view
//! flattens them across all resellers. Status moves strictly forward one
//! step at a time, and deletion is only legal from the terminal state.

use chrono::NaiveDate;

use revendo_core::{Money, OrderId, OrderStatus, ResellerId, ResellerOrder};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// A reseller's order annotated for the admin's global view.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedOrder {
    pub reseller_id: ResellerId,
    pub reseller_name: String,
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub item_count: usize,
    pub total: Money,
    pub status: OrderStatus,
}

/// Order-status workflow over every reseller's orders.
pub struct OrderService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> OrderService<'a> {
    /// Create an order service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Every reseller's orders, newest first, optionally filtered by
    /// status.
    #[must_use]
    pub fn all_orders(&self, status: Option<OrderStatus>) -> Vec<FlattenedOrder> {
        let mut orders: Vec<FlattenedOrder> = self
            .domain
            .resellers
            .iter()
            .flat_map(|r| {
                r.orders.iter().map(|o| FlattenedOrder {
                    reseller_id: r.id.clone(),
                    reseller_name: r.name.clone(),
                    order_id: o.id.clone(),
                    date: o.date,
                    item_count: o.items.len(),
                    total: o.total,
                    status: o.status,
                })
            })
            .filter(|o| status.is_none_or(|s| o.status == s))
            .collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }

    /// Move an order to `target`.
    ///
    /// # Errors
    ///
    /// - [`AdminError::NotFound`] for an unknown reseller or order.
    /// - [`AdminError::InvalidTransition`] unless `target` is the single
    ///   legal forward step (`Pendiente → En Camino → Entregado`);
    ///   backward moves and skips are rejected.
    pub fn advance_to(
        &mut self,
        reseller_id: &ResellerId,
        order_id: &OrderId,
        target: OrderStatus,
    ) -> Result<(), AdminError> {
        let order = self.order_mut(reseller_id, order_id)?;
        if !order.status.can_advance_to(target) {
            return Err(AdminError::InvalidTransition {
                from: order.status,
                to: target,
            });
        }
        order.status = target;
        self.domain.persist_resellers(self.store);
        tracing::info!(%reseller_id, %order_id, status = %target, "order advanced");
        Ok(())
    }

    /// Delete an order from the history.
    ///
    /// # Errors
    ///
    /// - [`AdminError::NotFound`] for an unknown reseller or order.
    /// - [`AdminError::OrderNotDeletable`] unless the order is
    ///   `Entregado`.
    pub fn delete(
        &mut self,
        reseller_id: &ResellerId,
        order_id: &OrderId,
    ) -> Result<(), AdminError> {
        let order = self.order_mut(reseller_id, order_id)?;
        if !order.status.is_terminal() {
            return Err(AdminError::OrderNotDeletable(order.status));
        }
        let reseller = self
            .domain
            .reseller_mut(reseller_id)
            .ok_or_else(|| AdminError::NotFound(format!("reseller {reseller_id}")))?;
        reseller.orders.retain(|o| &o.id != order_id);
        self.domain.persist_resellers(self.store);
        Ok(())
    }

    fn order_mut(
        &mut self,
        reseller_id: &ResellerId,
        order_id: &OrderId,
    ) -> Result<&mut ResellerOrder, AdminError> {
        let reseller = self
            .domain
            .reseller_mut(reseller_id)
            .ok_or_else(|| AdminError::NotFound(format!("reseller {reseller_id}")))?;
        reseller
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or_else(|| AdminError::NotFound(format!("order {order_id}")))
    }
}

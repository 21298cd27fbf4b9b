//! Admin-global client directory.
//!
//! Independent from each reseller's own client list; the two are never
//! reconciled.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use revendo_core::{Client, ClientId, Money, PaymentMethod};
use revendo_store::{Domain, JsonStore};

use crate::AdminError;

/// An in-progress client edit.
#[derive(Debug, Clone, Default)]
pub struct ClientDraft {
    /// Existing client ID when editing; `None` creates a new client.
    pub id: Option<ClientId>,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    /// Signed; negative means the client owes money.
    pub current_account_balance: Decimal,
    pub last_order_date: Option<NaiveDate>,
}

impl ClientDraft {
    /// Clone an existing client into a draft for editing.
    #[must_use]
    pub fn edit(client: &Client) -> Self {
        Self {
            id: Some(client.id.clone()),
            name: client.name.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            payment_method: client.payment_method,
            current_account_balance: client.current_account_balance.amount(),
            last_order_date: client.last_order_date,
        }
    }
}

/// Build a [`Client`] from a draft; shared with the reseller portal,
/// which applies the same rules to its own client list.
///
/// # Errors
///
/// Returns [`AdminError::Validation`] for a blank name.
pub fn client_from_draft(draft: ClientDraft) -> Result<Client, AdminError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AdminError::Validation("client name is required".into()));
    }
    Ok(Client {
        id: draft.id.unwrap_or_else(ClientId::generate),
        name: name.to_owned(),
        phone: draft.phone,
        address: draft.address,
        payment_method: draft.payment_method,
        current_account_balance: Money::new(draft.current_account_balance),
        last_order_date: draft.last_order_date,
    })
}

/// Client CRUD over the admin's global directory.
pub struct ClientDirectoryService<'a> {
    domain: &'a mut Domain,
    store: &'a JsonStore,
}

impl<'a> ClientDirectoryService<'a> {
    /// Create a client directory service over the domain state.
    pub fn new(domain: &'a mut Domain, store: &'a JsonStore) -> Self {
        Self { domain, store }
    }

    /// Validate a draft and replace-or-append it in the directory.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for a blank name.
    pub fn save_client(&mut self, draft: ClientDraft) -> Result<ClientId, AdminError> {
        let client = client_from_draft(draft)?;
        let id = client.id.clone();
        match self
            .domain
            .admin_clients
            .iter_mut()
            .find(|c| c.id == client.id)
        {
            Some(existing) => *existing = client,
            None => self.domain.admin_clients.push(client),
        }
        self.domain.persist_admin_clients(self.store);
        Ok(id)
    }

    /// Remove a client from the directory.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown client.
    pub fn delete_client(&mut self, id: &ClientId) -> Result<(), AdminError> {
        let before = self.domain.admin_clients.len();
        self.domain.admin_clients.retain(|c| &c.id != id);
        if self.domain.admin_clients.len() == before {
            return Err(AdminError::NotFound(format!("client {id}")));
        }
        self.domain.persist_admin_clients(self.store);
        Ok(())
    }
}

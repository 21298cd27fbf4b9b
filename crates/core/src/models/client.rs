//! Client (end customer) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ClientId, Money, PaymentMethod};

/// An end customer.
///
/// Two independent client lists exist: the admin's global directory and
/// each reseller's own list. They are never reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique client ID.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Delivery address.
    #[serde(default)]
    pub address: String,
    /// Preferred payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Running account balance; negative means the client owes money.
    #[serde(default)]
    pub current_account_balance: Money,
    /// Date of the client's most recent order, if any.
    #[serde(default)]
    pub last_order_date: Option<NaiveDate>,
}

impl Client {
    /// Whether the client currently owes money.
    #[must_use]
    pub fn has_debt(&self) -> bool {
        self.current_account_balance < Money::ZERO
    }
}

//! User records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::keys::{UserKey, user_key};
use crate::types::OrderId;

/// A customer with a cash balance.
///
/// Field names on the wire follow the seed documents (`Name`, `LastName`,
/// `Balance`, `Orders`); `snake_case` names are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// First name.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    /// Last name.
    #[serde(rename = "LastName", alias = "last_name")]
    pub last_name: String,
    /// Cash balance. May go negative.
    #[serde(rename = "Balance", alias = "balance", default)]
    pub balance: Decimal,
    /// Ids of the user's orders. Informational only.
    #[serde(rename = "Orders", alias = "orders", default)]
    pub orders: Vec<OrderId>,
}

impl User {
    /// Create a user with a zero balance and no orders.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if either name is empty.
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Result<Self, StoreError> {
        let user = Self {
            name: name.into(),
            last_name: last_name.into(),
            balance: Decimal::ZERO,
            orders: Vec::new(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// The store key derived from this user's names.
    #[must_use]
    pub fn key(&self) -> UserKey {
        user_key(&self.name, &self.last_name)
    }

    /// Check the fields the user store requires.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if either name is empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() || self.last_name.is_empty() {
            return Err(StoreError::Validation(
                "name or last name cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

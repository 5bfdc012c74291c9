//! The user store.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{BalanceHolder, Repository, Table};
use crate::error::StoreError;
use crate::keys::UserKey;
use crate::models::User;

/// Users keyed by `name-lastname`.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    table: Table<UserKey, User>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user. Returns whether the key existed.
    pub fn delete(&mut self, key: &UserKey) -> bool {
        self.table.remove(key).is_some()
    }
}

impl Repository for UserStore {
    type Key = UserKey;
    type Record = User;

    const ENTITY: &'static str = "user";

    fn insert(&mut self, user: User) -> Result<UserKey, StoreError> {
        user.validate()?;

        let key = user.key();
        if self.table.contains_key(&key) {
            return Err(StoreError::Duplicate {
                entity: Self::ENTITY,
                key: key.to_string(),
            });
        }

        self.table.put(key.clone(), user);
        Ok(key)
    }

    fn find(&self, key: &UserKey) -> Result<&User, StoreError> {
        self.table
            .get(key)
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, key))
    }

    fn bulk_insert(&mut self, records: HashMap<String, User>) {
        self.table
            .extend(records.into_iter().map(|(key, user)| (UserKey::from(key), user)));
    }

    fn len(&self) -> usize {
        self.table.len()
    }
}

impl BalanceHolder for UserStore {
    fn update_balance(&mut self, key: &UserKey, amount: Decimal) -> Result<Decimal, StoreError> {
        let user = self
            .table
            .get_mut(key)
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, key))?;
        user.balance = user
            .balance
            .checked_add(amount)
            .ok_or_else(|| StoreError::overflow(Self::ENTITY, key))?;
        Ok(user.balance)
    }
}

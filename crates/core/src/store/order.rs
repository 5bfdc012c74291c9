//! The order store.

use std::collections::HashMap;

use super::{Repository, Table};
use crate::error::StoreError;
use crate::keys::OrderKey;
use crate::models::Order;

/// Orders keyed by insertion position (`"1"`, `"2"`, ...).
///
/// The key has nothing to do with [`Order::id`]: callers must know the
/// position an order was inserted at to look it up.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    table: Table<OrderKey, Order>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag an order as refunded. Returns whether the key existed.
    ///
    /// Orders are never erased; this is the store's only removal-like
    /// operation.
    pub fn mark_refunded(&mut self, key: &OrderKey) -> bool {
        let Some(order) = self.table.get_mut(key) else {
            return false;
        };
        order.refunded = true;
        true
    }
}

impl Repository for OrderStore {
    type Key = OrderKey;
    type Record = Order;

    const ENTITY: &'static str = "order";

    fn insert(&mut self, order: Order) -> Result<OrderKey, StoreError> {
        order.validate()?;

        // Bulk-loaded keys can already occupy the next position.
        let key = OrderKey::positional(self.table.len());
        if self.table.put(key.clone(), order).is_some() {
            tracing::debug!(key = %key, "Replaced existing order");
        }
        Ok(key)
    }

    fn find(&self, key: &OrderKey) -> Result<&Order, StoreError> {
        self.table
            .get(key)
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, key))
    }

    fn bulk_insert(&mut self, records: HashMap<String, Order>) {
        self.table
            .extend(records.into_iter().map(|(key, order)| (OrderKey::from(key), order)));
    }

    fn len(&self) -> usize {
        self.table.len()
    }
}

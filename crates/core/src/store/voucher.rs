//! The voucher account store.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{BalanceHolder, Repository, Table};
use crate::error::StoreError;
use crate::keys::VoucherKey;
use crate::models::Voucher;

/// Voucher accounts keyed by `<user key>-<currency>`.
#[derive(Debug, Clone, Default)]
pub struct VoucherStore {
    table: Table<VoucherKey, Voucher>,
}

impl VoucherStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove an account. Returns whether the key existed.
    pub fn delete(&mut self, key: &VoucherKey) -> bool {
        self.table.remove(key).is_some()
    }
}

impl Repository for VoucherStore {
    type Key = VoucherKey;
    type Record = Voucher;

    const ENTITY: &'static str = "voucher account";

    fn insert(&mut self, voucher: Voucher) -> Result<VoucherKey, StoreError> {
        voucher.validate()?;

        let key = voucher.key();
        if self.table.put(key.clone(), voucher).is_some() {
            tracing::debug!(key = %key, "Replaced existing voucher account");
        }
        Ok(key)
    }

    fn find(&self, key: &VoucherKey) -> Result<&Voucher, StoreError> {
        if key.is_blank() {
            return Err(StoreError::not_found(Self::ENTITY, key));
        }

        self.table
            .get(key)
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, key))
    }

    fn bulk_insert(&mut self, records: HashMap<String, Voucher>) {
        self.table.extend(
            records
                .into_iter()
                .map(|(key, voucher)| (VoucherKey::from(key), voucher)),
        );
    }

    fn len(&self) -> usize {
        self.table.len()
    }
}

impl BalanceHolder for VoucherStore {
    fn update_balance(
        &mut self,
        key: &VoucherKey,
        amount: Decimal,
    ) -> Result<Decimal, StoreError> {
        let voucher = self
            .table
            .get_mut(key)
            .ok_or_else(|| StoreError::not_found(Self::ENTITY, key))?;
        voucher.balance = voucher
            .balance
            .checked_add(amount)
            .ok_or_else(|| StoreError::overflow(Self::ENTITY, key))?;
        Ok(voucher.balance)
    }
}

//! Voucher (store credit) accounts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{StoreError, VoucherError};
use crate::keys::{UserKey, VoucherKey, voucher_key};
use crate::types::{CurrencyCode, DEFAULT_CURRENCY};

/// A user's store-credit account.
///
/// The owning user key decides where the account is stored but is never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voucher {
    /// Store credit available.
    pub balance: Decimal,
    /// Account currency.
    pub currency: CurrencyCode,
    #[serde(skip)]
    owner: UserKey,
}

impl Voucher {
    /// Open an account in [`DEFAULT_CURRENCY`] for `owner`.
    ///
    /// # Errors
    ///
    /// Returns `VoucherError::EmptyOwner` if the user key is blank.
    pub fn new(balance: Decimal, owner: UserKey) -> Result<Self, VoucherError> {
        if owner.is_blank() {
            return Err(VoucherError::EmptyOwner);
        }

        Ok(Self {
            balance,
            currency: DEFAULT_CURRENCY,
            owner,
        })
    }

    /// Change the account currency. The voucher store only accepts
    /// [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    /// The store key of this account.
    #[must_use]
    pub fn key(&self) -> VoucherKey {
        voucher_key(&self.owner)
    }

    /// Check the account may be persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CurrencyMismatch` for any non-default currency.
    pub fn validate(&self) -> Result<(), StoreError> {
        if !self.currency.is_default() {
            return Err(StoreError::CurrencyMismatch {
                given: self.currency,
                expected: DEFAULT_CURRENCY,
            });
        }
        Ok(())
    }
}

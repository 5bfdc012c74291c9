//! The bundle of stores one refund operates on.

use crate::keys::{OrderKey, UserKey};
use crate::refund::{self, RefundError, RefundReceipt};
use crate::store::{OrderStore, UserStore, VoucherStore};

/// Users, orders and voucher accounts of one shop.
///
/// Owns its stores outright; callers that share a ledger between threads
/// wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// User records.
    pub users: UserStore,
    /// Order records.
    pub orders: OrderStore,
    /// Voucher accounts.
    pub vouchers: VoucherStore,
}

impl Ledger {
    /// Create a ledger with empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refund an order to a user. See [`refund::process_refund`].
    ///
    /// # Errors
    ///
    /// Returns the first [`RefundError`] the workflow hits.
    pub fn refund(
        &mut self,
        user_key: &UserKey,
        order_key: &OrderKey,
    ) -> Result<RefundReceipt, RefundError> {
        refund::process_refund(self, user_key, order_key)
    }
}

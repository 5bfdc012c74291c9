//! Keyed, in-memory record stores.
//!
//! Three stores share one contract ([`Repository`]):
//!
//! | Store | Key | Insert | Removal |
//! |-------|-----|--------|---------|
//! | [`UserStore`] | `name-lastname` | rejects duplicates | erase |
//! | [`OrderStore`] | positional (`len + 1`) | overwrites | [`OrderStore::mark_refunded`] |
//! | [`VoucherStore`] | `userkey-usd` | overwrites | erase |
//!
//! Lookups hand back a borrow of the stored record. Mutations name their key
//! explicitly, so there is no staged "current record" shared between calls.

mod order;
mod table;
mod user;
mod voucher;

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::StoreError;

pub use order::OrderStore;
use table::Table;
pub use user::UserStore;
pub use voucher::VoucherStore;

/// Operations every record store supports.
pub trait Repository {
    /// Lookup key type.
    type Key;
    /// Stored record type.
    type Record;

    /// Name used in error messages.
    const ENTITY: &'static str;

    /// Validate and store a record, returning the key it was stored under.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` or `StoreError::CurrencyMismatch` if
    /// the record is incomplete, and `StoreError::Duplicate` if the store
    /// refuses key reuse.
    fn insert(&mut self, record: Self::Record) -> Result<Self::Key, StoreError>;

    /// Look up a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record is stored under `key`.
    fn find(&self, key: &Self::Key) -> Result<&Self::Record, StoreError>;

    /// Load records under caller-supplied keys, bypassing validation.
    ///
    /// Only meant for bootstrap. Existing entries with the same key are
    /// replaced.
    fn bulk_insert(&mut self, records: HashMap<String, Self::Record>);

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record is stored under `key`.
    fn contains(&self, key: &Self::Key) -> bool {
        self.find(key).is_ok()
    }
}

/// Stores whose records carry a balance that refunds credit.
pub trait BalanceHolder: Repository {
    /// Add `amount` to the balance stored under `key` and return the new
    /// balance.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record is stored under `key`.
    fn update_balance(&mut self, key: &Self::Key, amount: Decimal) -> Result<Decimal, StoreError>;
}

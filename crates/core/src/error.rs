//! Error types shared by the record stores and models.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Errors returned by record store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field is missing or out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record with the same derived key already exists.
    #[error("{entity} already exists: {key}")]
    Duplicate {
        /// Kind of record ("user", ...).
        entity: &'static str,
        /// The colliding key.
        key: String,
    },

    /// No record is stored under the key.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Kind of record ("user", "order", "voucher account").
        entity: &'static str,
        /// The key that was looked up.
        key: String,
    },

    /// Crediting the balance would leave the representable range.
    #[error("{entity} balance overflow: {key}")]
    Overflow {
        /// Kind of record ("user", "voucher account").
        entity: &'static str,
        /// Key of the record whose balance was left unchanged.
        key: String,
    },

    /// A voucher account was given a currency other than the default.
    #[error("wrong currency given: {given}, expected {expected}")]
    CurrencyMismatch {
        /// Currency on the rejected account.
        given: CurrencyCode,
        /// The only accepted currency.
        expected: CurrencyCode,
    },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, key: impl AsRef<str>) -> Self {
        Self::NotFound {
            entity,
            key: key.as_ref().to_owned(),
        }
    }

    pub(crate) fn overflow(entity: &'static str, key: impl AsRef<str>) -> Self {
        Self::Overflow {
            entity,
            key: key.as_ref().to_owned(),
        }
    }

    /// Whether this is a lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors constructing a voucher account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoucherError {
    /// The owning user key is empty or whitespace.
    #[error("user key cannot be empty")]
    EmptyOwner,
}

//! Store keys and the functions that derive them.
//!
//! Users and voucher accounts are keyed by values derived from their identity,
//! so the same person always lands on the same entry:
//!
//! - user: `lowercase(name) + "-" + lowercase(last_name)`
//! - voucher: `user_key + "-" + lowercase(currency)`
//!
//! Orders are not keyed by their id. The order store hands out positional
//! keys instead; see [`OrderKey::positional`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_CURRENCY;

macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an already derived key without touching it.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the key is empty or whitespace only.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }
    };
}

define_key!(
    /// Lookup key of a user record.
    UserKey
);
define_key!(
    /// Lookup key of an order record.
    OrderKey
);
define_key!(
    /// Lookup key of a voucher account.
    VoucherKey
);

impl OrderKey {
    /// The key the order store assigns to its next insert, given how many
    /// orders it already holds.
    #[must_use]
    pub fn positional(current_len: usize) -> Self {
        Self((current_len + 1).to_string())
    }
}

/// Derive the store key of a user.
///
/// Blank names are not rejected here; the user store refuses them on insert.
#[must_use]
pub fn user_key(name: &str, last_name: &str) -> UserKey {
    UserKey(format!(
        "{}-{}",
        name.to_lowercase(),
        last_name.to_lowercase()
    ))
}

/// Derive the key of the voucher account owned by `user_key`.
#[must_use]
pub fn voucher_key(user_key: &UserKey) -> VoucherKey {
    VoucherKey(format!(
        "{}-{}",
        user_key.as_str(),
        DEFAULT_CURRENCY.code().to_lowercase()
    ))
}

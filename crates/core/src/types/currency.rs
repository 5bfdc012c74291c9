//! Currency codes.
//!
//! Refund balances are plain [`rust_decimal::Decimal`] amounts; the currency
//! only matters for voucher accounts, which are opened in
//! [`DEFAULT_CURRENCY`] and refuse anything else.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The only currency voucher accounts may be held in.
pub const DEFAULT_CURRENCY: CurrencyCode = CurrencyCode::USD;

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
}

impl CurrencyCode {
    /// The upper-case ISO code, e.g. `"USD"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }

    /// Whether this is [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn is_default(self) -> bool {
        self == DEFAULT_CURRENCY
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

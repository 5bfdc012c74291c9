//! Order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::classification::deserialize_optional;
use crate::types::{OrderId, PaymentMethod, ShippingZone};

/// A placed order, as far as refunds care about it.
///
/// Payment method and shipping zone are optional on the type so that seed
/// documents with unset (`0`) values still load; the order store refuses to
/// insert such orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Business order number.
    #[serde(rename = "ID", alias = "id", default)]
    pub id: OrderId,
    /// Amount paid, refunded in full.
    #[serde(rename = "Total", alias = "total")]
    pub total: Decimal,
    /// How the order was paid.
    #[serde(
        rename = "PaymentWay",
        alias = "payment_method",
        default,
        deserialize_with = "deserialize_optional"
    )]
    pub payment_method: Option<PaymentMethod>,
    /// Where the order shipped.
    #[serde(
        rename = "ShippingCountryZone",
        alias = "CountryZone",
        alias = "shipping_zone",
        default,
        deserialize_with = "deserialize_optional"
    )]
    pub shipping_zone: Option<ShippingZone>,
    /// Set once the order has been refunded. Never cleared.
    #[serde(rename = "IsDeleted", alias = "refunded", default)]
    pub refunded: bool,
}

impl Order {
    /// Create an order that has not been refunded.
    #[must_use]
    pub const fn new(
        id: OrderId,
        total: Decimal,
        payment_method: PaymentMethod,
        shipping_zone: ShippingZone,
    ) -> Self {
        Self {
            id,
            total,
            payment_method: Some(payment_method),
            shipping_zone: Some(shipping_zone),
            refunded: false,
        }
    }

    /// Check the fields the order store requires.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the payment method or shipping zone
    /// is unset, or if the total is negative.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.payment_method.is_none() {
            return Err(StoreError::Validation("payment way is missing".to_owned()));
        }
        if self.shipping_zone.is_none() {
            return Err(StoreError::Validation("zone is missing".to_owned()));
        }
        if self.total < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "order total cannot be negative: {}",
                self.total
            )));
        }
        Ok(())
    }
}

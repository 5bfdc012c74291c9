//! Business order number.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The number an order carries in the shop's records.
///
/// This is not the key the order store files the order under; see
/// [`crate::keys::OrderKey`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i32);

impl OrderId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i32 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_roundtrips_through_i32() {
        let id = OrderId::from(42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_order_id_is_transparent_in_json() {
        let id: OrderId = serde_json::from_str("7").unwrap();
        assert_eq!(id, OrderId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_order_ids_sort_numerically() {
        let mut ids = vec![OrderId::new(10), OrderId::new(2), OrderId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![OrderId::new(2), OrderId::new(7), OrderId::new(10)]);
    }
}

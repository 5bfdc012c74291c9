//! Integration tests for Order Refunds.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-refunds-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `refund_workflow` - Refund properties exercised through the core API
//! - `refund_api` - HTTP endpoint against the bundled seed documents
//!
//! Shared fixtures live here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use rust_decimal::Decimal;

use order_refunds_core::{
    Ledger, Order, OrderId, OrderKey, PaymentMethod, Repository, ShippingZone, User, UserKey,
};

/// The repository's `data/` directory.
#[must_use]
pub fn seed_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// A ledger with one user and no orders.
///
/// # Panics
///
/// Panics if the fixture user is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn ledger_with_user(name: &str, last_name: &str, balance: i64) -> (Ledger, UserKey) {
    let mut ledger = Ledger::new();
    let key = ledger
        .users
        .insert(
            User::new(name, last_name)
                .expect("fixture user")
                .with_balance(Decimal::from(balance)),
        )
        .expect("fixture user insert");
    (ledger, key)
}

/// Insert an unrefunded order and return its positional key.
///
/// # Panics
///
/// Panics if the order store rejects the fixture.
#[allow(clippy::expect_used)]
pub fn add_order(
    ledger: &mut Ledger,
    total: i64,
    payment: PaymentMethod,
    zone: ShippingZone,
) -> OrderKey {
    let id = i32::try_from(ledger.orders.len() + 100).expect("fixture order id");
    ledger
        .orders
        .insert(Order::new(OrderId::new(id), Decimal::from(total), payment, zone))
        .expect("fixture order insert")
}

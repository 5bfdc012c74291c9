//! Refund workflow properties, driven through the public core API.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use order_refunds_core::{
    BalanceHolder, OrderKey, PaymentMethod, RefundChannel, RefundError, Repository,
    ShippingZone, StoreError, User, UserKey, user_key, voucher_key,
};
use order_refunds_integration_tests::{add_order, ledger_with_user};

const PAYMENTS: [PaymentMethod; 3] = [
    PaymentMethod::CreditCard,
    PaymentMethod::CashOnDelivery,
    PaymentMethod::Paypal,
];
const ZONES: [ShippingZone; 3] = [ShippingZone::Europe, ShippingZone::Mena, ShippingZone::America];

fn balance(ledger: &order_refunds_core::Ledger, key: &UserKey) -> Decimal {
    ledger.users.find(key).unwrap().balance
}

// =============================================================================
// Key Derivation
// =============================================================================

#[test]
fn test_user_keys_collide_case_insensitively() {
    let (mut ledger, key) = ledger_with_user("John", "Doe", 100);
    assert_eq!(key, user_key("john", "doe"));

    let err = ledger.users.insert(User::new("JOHN", "DOE").unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));
    assert_eq!(ledger.users.len(), 1);
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_mena_cash_on_delivery_goes_to_voucher() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 100);
    let order = add_order(&mut ledger, 300, PaymentMethod::CashOnDelivery, ShippingZone::Mena);

    ledger.refund(&john, &order).unwrap();

    assert!(ledger.orders.find(&order).unwrap().refunded);
    let voucher = ledger.vouchers.find(&voucher_key(&john)).unwrap();
    assert_eq!(voucher.balance, Decimal::from(300));
    assert_eq!(balance(&ledger, &john), Decimal::from(100));
}

#[test]
fn test_europe_credit_card_goes_to_cash() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 100);
    let order = add_order(&mut ledger, 100, PaymentMethod::CreditCard, ShippingZone::Europe);

    ledger.refund(&john, &order).unwrap();

    assert!(ledger.orders.find(&order).unwrap().refunded);
    assert_eq!(balance(&ledger, &john), Decimal::from(200));
    assert!(ledger.vouchers.is_empty());
}

// =============================================================================
// Channel Routing
// =============================================================================

#[test]
fn test_every_combination_routes_to_exactly_one_channel() {
    for payment in PAYMENTS {
        for zone in ZONES {
            let (mut ledger, user) = ledger_with_user("Eric", "Smith", 50);
            let order = add_order(&mut ledger, 40, payment, zone);

            let receipt = ledger.refund(&user, &order).unwrap();

            if zone == ShippingZone::Mena && payment == PaymentMethod::CashOnDelivery {
                assert_eq!(receipt.channel, RefundChannel::Voucher);
                assert_eq!(balance(&ledger, &user), Decimal::from(50));
                assert_eq!(
                    ledger.vouchers.find(&voucher_key(&user)).unwrap().balance,
                    Decimal::from(40)
                );
            } else {
                assert_eq!(receipt.channel, RefundChannel::Cash);
                assert_eq!(balance(&ledger, &user), Decimal::from(90));
                assert!(ledger.vouchers.is_empty());
            }
        }
    }
}

// =============================================================================
// Idempotency and Accumulation
// =============================================================================

#[test]
fn test_second_refund_of_same_order_changes_nothing() {
    for payment in PAYMENTS {
        for zone in ZONES {
            let (mut ledger, user) = ledger_with_user("Jane", "Doe", 150);
            let order = add_order(&mut ledger, 25, payment, zone);

            ledger.refund(&user, &order).unwrap();
            let cash_after_first = balance(&ledger, &user);
            let voucher_after_first = ledger
                .vouchers
                .find(&voucher_key(&user))
                .map(|v| v.balance)
                .ok();

            let err = ledger.refund(&user, &order).unwrap_err();

            assert_eq!(err, RefundError::AlreadyRefunded(order.clone()));
            assert_eq!(balance(&ledger, &user), cash_after_first);
            assert_eq!(
                ledger.vouchers.find(&voucher_key(&user)).map(|v| v.balance).ok(),
                voucher_after_first
            );
        }
    }
}

#[test]
fn test_voucher_refunds_accumulate_into_one_account() {
    let (mut ledger, jane) = ledger_with_user("Jane", "Doe", 150);
    let first = add_order(&mut ledger, 150, PaymentMethod::CashOnDelivery, ShippingZone::Mena);
    let second = add_order(&mut ledger, 75, PaymentMethod::CashOnDelivery, ShippingZone::Mena);

    let opened = ledger.refund(&jane, &first).unwrap();
    let topped_up = ledger.refund(&jane, &second).unwrap();

    assert!(opened.voucher_opened);
    assert!(!topped_up.voucher_opened);
    assert_eq!(topped_up.balance, Decimal::from(225));
    assert_eq!(ledger.vouchers.len(), 1);
}

#[test]
fn test_vouchers_are_per_user() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 0);
    let jane = ledger.users.insert(User::new("Jane", "Doe").unwrap()).unwrap();
    let johns = add_order(&mut ledger, 10, PaymentMethod::CashOnDelivery, ShippingZone::Mena);
    let janes = add_order(&mut ledger, 20, PaymentMethod::CashOnDelivery, ShippingZone::Mena);

    ledger.refund(&john, &johns).unwrap();
    ledger.refund(&jane, &janes).unwrap();

    assert_eq!(ledger.vouchers.len(), 2);
    assert_eq!(ledger.vouchers.find(&voucher_key(&john)).unwrap().balance, Decimal::from(10));
    assert_eq!(ledger.vouchers.find(&voucher_key(&jane)).unwrap().balance, Decimal::from(20));
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_missing_order_leaves_stores_untouched() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 100);
    let order = add_order(&mut ledger, 100, PaymentMethod::Paypal, ShippingZone::America);

    let err = ledger.refund(&john, &OrderKey::from("987")).unwrap_err();

    assert_eq!(err, RefundError::OrderNotFound(OrderKey::from("987")));
    assert_eq!(balance(&ledger, &john), Decimal::from(100));
    assert!(!ledger.orders.find(&order).unwrap().refunded);
    assert!(ledger.vouchers.is_empty());
}

#[test]
fn test_missing_user_leaves_stores_untouched() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 100);
    let order = add_order(&mut ledger, 100, PaymentMethod::CashOnDelivery, ShippingZone::Mena);

    let err = ledger
        .refund(&UserKey::from("barbara-streisand"), &order)
        .unwrap_err();

    assert!(matches!(err, RefundError::UserNotFound(_)));
    assert_eq!(balance(&ledger, &john), Decimal::from(100));
    assert!(!ledger.orders.find(&order).unwrap().refunded);
    assert!(ledger.vouchers.is_empty());
}

#[test]
fn test_orders_are_looked_up_by_position_not_id() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 0);
    let key = add_order(&mut ledger, 5, PaymentMethod::CreditCard, ShippingZone::Europe);
    let id = ledger.orders.find(&key).unwrap().id;

    assert_eq!(key.as_str(), "1");
    assert_ne!(id.to_string(), key.as_str());
    assert!(matches!(
        ledger.refund(&john, &OrderKey::from(id.to_string())),
        Err(RefundError::OrderNotFound(_))
    ));
    assert!(ledger.refund(&john, &key).is_ok());
}

#[test]
fn test_user_balance_can_be_debited_directly() {
    let (mut ledger, john) = ledger_with_user("John", "Doe", 10);
    let new_balance = ledger.users.update_balance(&john, Decimal::from(-25)).unwrap();
    assert_eq!(new_balance, Decimal::from(-15));
}

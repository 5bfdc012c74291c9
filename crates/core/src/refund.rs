//! The refund workflow.
//!
//! ```text
//! Start ──find user──▶ UserResolved ──find order──▶ OrderResolved
//!                                                     │
//!                          already refunded ◀─────────┤
//!                              (Rejected)             │ mark refunded
//!                                                     ▼
//!                                               RefundApplied
//!                                          (cash or voucher credit)
//! ```
//!
//! Orders shipped to MENA and paid cash on delivery are refunded as store
//! credit; everything else goes back to the user's cash balance.
//!
//! The order is flagged as refunded before any money moves. If crediting
//! fails afterwards the flag stays set; nothing is rolled back.

use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{StoreError, VoucherError};
use crate::keys::{OrderKey, UserKey, voucher_key};
use crate::ledger::Ledger;
use crate::models::{Order, Voucher};
use crate::store::{BalanceHolder, Repository};
use crate::types::{OrderId, PaymentMethod, ShippingZone};

/// Why a refund was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefundError {
    /// No user is stored under the key.
    #[error("user not found: {0}")]
    UserNotFound(UserKey),

    /// No order is stored under the key.
    #[error("order not found: {0}")]
    OrderNotFound(OrderKey),

    /// The order was refunded before.
    #[error("order already refunded: {0}")]
    AlreadyRefunded(OrderKey),

    /// A voucher account could not be opened.
    #[error("cannot open voucher account: {0}")]
    VoucherConstruction(#[from] VoucherError),

    /// A store rejected the credit.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where refunded money goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundChannel {
    /// The user's cash balance.
    Cash,
    /// The user's voucher account.
    Voucher,
}

impl RefundChannel {
    /// Pick the channel for an order.
    ///
    /// Only MENA orders paid cash on delivery are refunded to a voucher.
    #[must_use]
    pub fn for_order(order: &Order) -> Self {
        match (order.shipping_zone, order.payment_method) {
            (Some(ShippingZone::Mena), Some(PaymentMethod::CashOnDelivery)) => Self::Voucher,
            _ => Self::Cash,
        }
    }
}

impl fmt::Display for RefundChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Voucher => write!(f, "voucher"),
        }
    }
}

/// Workflow states, recorded on log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundStage {
    Start,
    UserResolved,
    OrderResolved,
    Rejected,
    RefundApplied,
}

impl fmt::Display for RefundStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::UserResolved => write!(f, "user_resolved"),
            Self::OrderResolved => write!(f, "order_resolved"),
            Self::Rejected => write!(f, "rejected"),
            Self::RefundApplied => write!(f, "refund_applied"),
        }
    }
}

/// Outcome of an applied refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundReceipt {
    /// Unique id of this refund.
    pub refund_id: Uuid,
    /// User credited.
    pub user_key: UserKey,
    /// Order refunded.
    pub order_key: OrderKey,
    /// Business id of the refunded order.
    pub order_id: OrderId,
    /// Where the money went.
    pub channel: RefundChannel,
    /// Amount credited.
    pub amount: Decimal,
    /// Cash or voucher balance after the credit.
    pub balance: Decimal,
    /// Whether this refund opened the user's voucher account.
    pub voucher_opened: bool,
    /// When the refund was applied.
    pub refunded_at: DateTime<Utc>,
}

/// Refund the order stored under `order_key` to the user stored under
/// `user_key`.
///
/// # Errors
///
/// - `RefundError::UserNotFound` / `RefundError::OrderNotFound` if a lookup
///   misses. Nothing is changed.
/// - `RefundError::AlreadyRefunded` if the order's refunded flag is set.
///   Nothing is changed.
/// - `RefundError::VoucherConstruction` or `RefundError::Store` if crediting
///   fails. The order stays flagged as refunded.
pub fn process_refund(
    ledger: &mut Ledger,
    user_key: &UserKey,
    order_key: &OrderKey,
) -> Result<RefundReceipt, RefundError> {
    tracing::debug!(
        user_key = %user_key,
        order_key = %order_key,
        stage = %RefundStage::Start,
        "Refund requested"
    );

    if !ledger.users.contains(user_key) {
        return Err(RefundError::UserNotFound(user_key.clone()));
    }
    tracing::debug!(user_key = %user_key, stage = %RefundStage::UserResolved, "User resolved");

    let order = ledger
        .orders
        .find(order_key)
        .map_err(|_| RefundError::OrderNotFound(order_key.clone()))?;
    let (order_id, amount, channel) = (order.id, order.total, RefundChannel::for_order(order));
    tracing::debug!(
        order_key = %order_key,
        order_id = %order_id,
        stage = %RefundStage::OrderResolved,
        "Order resolved"
    );

    if order.refunded {
        tracing::warn!(
            user_key = %user_key,
            order_key = %order_key,
            stage = %RefundStage::Rejected,
            "Order already refunded"
        );
        return Err(RefundError::AlreadyRefunded(order_key.clone()));
    }

    ledger.orders.mark_refunded(order_key);

    let (balance, voucher_opened) = match channel {
        RefundChannel::Cash => (ledger.users.update_balance(user_key, amount)?, false),
        RefundChannel::Voucher => credit_voucher(ledger, user_key, amount)?,
    };

    tracing::info!(
        user_key = %user_key,
        order_key = %order_key,
        channel = %channel,
        amount = %amount,
        balance = %balance,
        voucher_opened,
        stage = %RefundStage::RefundApplied,
        "Refund applied"
    );

    Ok(RefundReceipt {
        refund_id: Uuid::new_v4(),
        user_key: user_key.clone(),
        order_key: order_key.clone(),
        order_id,
        channel,
        amount,
        balance,
        voucher_opened,
        refunded_at: Utc::now(),
    })
}

/// Credit `amount` to the user's voucher account, opening it on first use.
fn credit_voucher(
    ledger: &mut Ledger,
    user_key: &UserKey,
    amount: Decimal,
) -> Result<(Decimal, bool), RefundError> {
    let key = voucher_key(user_key);

    match ledger.vouchers.find(&key) {
        Ok(_) => Ok((ledger.vouchers.update_balance(&key, amount)?, false)),
        Err(err) if err.is_not_found() => {
            let voucher = Voucher::new(amount, user_key.clone())?;
            ledger.vouchers.insert(voucher)?;
            tracing::info!(voucher_key = %key, "Opened voucher account");
            Ok((amount, true))
        }
        Err(err) => Err(err.into()),
    }
}

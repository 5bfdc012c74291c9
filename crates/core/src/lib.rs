//! Order Refunds Core - refund workflow and record stores.
//!
//! This crate holds everything that decides a refund:
//! - [`keys`] - Store key derivation for users and voucher accounts
//! - [`models`] - `User`, `Order` and `Voucher` records
//! - [`store`] - Keyed in-memory stores for each record type
//! - [`refund`] - The refund workflow and its errors
//! - [`ledger`] - The three stores bundled for one workflow call
//!
//! # Architecture
//!
//! The core crate does no I/O: no HTTP, no files. Loading seed data and
//! serving requests live in the `api` crate, so the workflow can be driven
//! from tests, the HTTP server and the CLI alike.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod keys;
pub mod ledger;
pub mod models;
pub mod refund;
pub mod store;
pub mod types;

pub use error::{StoreError, VoucherError};
pub use keys::{OrderKey, UserKey, VoucherKey, user_key, voucher_key};
pub use ledger::Ledger;
pub use models::{Order, User, Voucher};
pub use refund::{RefundChannel, RefundError, RefundReceipt, process_refund};
pub use store::{BalanceHolder, OrderStore, Repository, UserStore, VoucherStore};
pub use types::*;

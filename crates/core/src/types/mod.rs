//! Core types for Order Refunds.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod classification;
pub mod currency;
pub mod id;

pub use classification::{PaymentMethod, ShippingZone};
pub use currency::{CurrencyCode, DEFAULT_CURRENCY};
pub use id::OrderId;

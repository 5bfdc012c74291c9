//! HTTP middleware for the refund API.
//!
//! Outermost first: Sentry layers (added by the binary), `TraceLayer`, then
//! request id.

pub mod request_id;

pub use request_id::{RequestId, request_id_middleware};

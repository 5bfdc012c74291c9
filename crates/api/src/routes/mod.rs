//! HTTP route handlers for the refund API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//! POST /order/{order_key}/refund/  - Refund an order to a user
//! ```

pub mod refund;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/{order_key}/refund/", post(refund::refund))
        .route("/{order_key}/refund", post(refund::refund))
}

/// Create all routes for the refund API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/order", order_routes())
}

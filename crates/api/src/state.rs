//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use order_refunds_core::Ledger;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The ledger sits behind a
/// single mutex, so refunds are applied one at a time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    ledger: Mutex<Ledger>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// `ledger` holds the stores loaded from seed data.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                ledger: Mutex::new(ledger),
            }),
        }
    }

    /// Get the ledger lock.
    #[must_use]
    pub fn ledger(&self) -> &Mutex<Ledger> {
        &self.inner.ledger
    }
}

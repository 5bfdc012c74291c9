//! Seed data loading.
//!
//! The ledger starts from two JSON documents in the data directory:
//!
//! - `users.json` - object mapping user keys to users
//! - `orders.json` - object mapping order keys to orders
//!
//! Records are loaded with `bulk_insert` under the keys the documents give
//! them, without validation. [`SeedData::problems`] reports records the stores
//! would have refused.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use order_refunds_core::{Ledger, Order, Repository, User};

/// File name of the users document.
pub const USERS_FILE: &str = "users.json";
/// File name of the orders document.
pub const ORDERS_FILE: &str = "orders.json";

/// Errors loading seed documents.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file is missing or unreadable.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid seed document.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A record that loads but breaks a store invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProblem {
    /// Which document the record came from.
    pub document: &'static str,
    /// Key of the record in that document.
    pub key: String,
    /// What is wrong with it.
    pub reason: String,
}

/// The parsed seed documents.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    /// Users by key.
    pub users: HashMap<String, User>,
    /// Orders by key.
    pub orders: HashMap<String, Order>,
}

impl SeedData {
    /// Read both documents from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if either file is missing, unreadable, or malformed.
    pub async fn load(dir: &Path) -> Result<Self, SeedError> {
        let users = read_document(&dir.join(USERS_FILE)).await?;
        let orders = read_document(&dir.join(ORDERS_FILE)).await?;

        tracing::info!(
            dir = %dir.display(),
            users = users.len(),
            orders = orders.len(),
            "Seed data loaded"
        );

        Ok(Self { users, orders })
    }

    /// Records that break a store invariant, sorted by document and key.
    #[must_use]
    pub fn problems(&self) -> Vec<SeedProblem> {
        let mut problems = Vec::new();

        for (key, user) in &self.users {
            if let Err(e) = user.validate() {
                problems.push(SeedProblem {
                    document: USERS_FILE,
                    key: key.clone(),
                    reason: e.to_string(),
                });
            } else if user.key().as_str() != key {
                problems.push(SeedProblem {
                    document: USERS_FILE,
                    key: key.clone(),
                    reason: format!("key does not match derived user key {}", user.key()),
                });
            }
        }

        for (key, order) in &self.orders {
            if let Err(e) = order.validate() {
                problems.push(SeedProblem {
                    document: ORDERS_FILE,
                    key: key.clone(),
                    reason: e.to_string(),
                });
            }
        }

        problems.sort_by(|a, b| (a.document, &a.key).cmp(&(b.document, &b.key)));
        problems
    }

    /// Build a ledger holding the seed records and no voucher accounts.
    #[must_use]
    pub fn into_ledger(self) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.users.bulk_insert(self.users);
        ledger.orders.bulk_insert(self.orders);
        tracing::debug!(
            users = ledger.users.len(),
            orders = ledger.orders.len(),
            "Ledger initialized"
        );
        ledger
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

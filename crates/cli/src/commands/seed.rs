//! Seed document checks.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use order_refunds_api::seed::SeedData;

/// Seed check failures.
#[derive(Debug, Error)]
pub enum SeedCheckError {
    #[error("{0} invalid seed records found")]
    InvalidRecords(usize),
}

/// Load the seed documents and report records the stores would refuse.
///
/// # Errors
///
/// Returns an error if a document cannot be loaded or any record is invalid.
pub async fn check(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %data_dir.display(), "Checking seed data");

    let seed = SeedData::load(data_dir).await?;

    info!("Seed Data");
    info!("=========");
    info!("Users: {}", seed.users.len());
    info!("Orders: {}", seed.orders.len());

    let problems = seed.problems();
    if problems.is_empty() {
        info!("All records valid");
        return Ok(());
    }

    error!("Invalid records:");
    for problem in &problems {
        error!("  - {} [{}]: {}", problem.document, problem.key, problem.reason);
    }

    Err(SeedCheckError::InvalidRecords(problems.len()).into())
}

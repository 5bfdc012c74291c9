//! Offline refunds against seed data.

use std::path::Path;

use tracing::info;

use order_refunds_api::seed::SeedData;
use order_refunds_core::{OrderKey, UserKey};

/// Load the seed documents, refund one order and log the receipt.
///
/// The ledger is discarded afterwards; seed files are never modified.
///
/// # Errors
///
/// Returns an error if seed data cannot be loaded or the refund is rejected.
pub async fn run(
    data_dir: &Path,
    user_key: &str,
    order_key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = SeedData::load(data_dir).await?.into_ledger();

    let receipt = ledger.refund(&UserKey::from(user_key), &OrderKey::from(order_key))?;

    info!(
        refund_id = %receipt.refund_id,
        channel = %receipt.channel,
        amount = %receipt.amount,
        balance = %receipt.balance,
        voucher_opened = receipt.voucher_opened,
        "Refund applied"
    );
    info!("{}", serde_json::to_string_pretty(&receipt)?);

    Ok(())
}

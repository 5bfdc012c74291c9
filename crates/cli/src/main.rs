//! Order Refunds CLI - seed checks and offline refunds.
//!
//! # Usage
//!
//! ```bash
//! # Check the seed documents for records the stores would refuse
//! refunds-cli seed check --data-dir ./data
//!
//! # Run one refund against the seed documents (nothing is written back)
//! refunds-cli refund --user john-doe --order 3
//! ```
//!
//! `--data-dir` defaults to `REFUNDS_DATA_DIR` (or `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use order_refunds_api::config::ApiConfig;

mod commands;

#[derive(Parser)]
#[command(name = "refunds-cli")]
#[command(author, version, about = "Order Refunds CLI tools")]
struct Cli {
    /// Directory holding users.json and orders.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect seed data
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Refund an order against the seed data
    Refund {
        /// User key (e.g. john-doe)
        #[arg(short, long)]
        user: String,

        /// Order key (position in orders.json, not the order id)
        #[arg(short, long)]
        order: String,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Report records that break store invariants
    Check,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ApiConfig::from_env()?.data_dir,
    };

    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Check => commands::seed::check(&data_dir).await?,
        },
        Commands::Refund { user, order } => {
            commands::refund::run(&data_dir, &user, &order).await?;
        }
    }
    Ok(())
}

//! Order Refunds API - HTTP refund endpoint.
//!
//! This binary serves `POST /order/{order_key}/refund/` on port 8090.
//!
//! # Startup
//!
//! 1. Load configuration from the environment (`.env` honoured)
//! 2. Initialize Sentry and tracing
//! 3. Load `users.json` and `orders.json` from `REFUNDS_DATA_DIR`; a missing
//!    or malformed document aborts startup
//! 4. Serve until Ctrl+C / SIGTERM
//!
//! All state lives in memory and is lost on shutdown.

#![cfg_attr(not(test), forbid(unsafe_code))]

use order_refunds_api::config::ApiConfig;
use order_refunds_api::seed::{SeedData, SeedError};
use order_refunds_api::state::AppState;
use order_refunds_core::Ledger;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ApiConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO | tracing::Level::DEBUG => {
            sentry_tracing::EventFilter::Breadcrumb
        }
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the fmt and Sentry layers behind an `EnvFilter`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "order_refunds_api=info,order_refunds_core=info,tower_http=debug".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Load the seed documents, logging records that would fail validation.
async fn load_ledger(config: &ApiConfig) -> Result<Ledger, SeedError> {
    let seed = SeedData::load(&config.data_dir).await?;

    let problems = seed.problems();
    for problem in &problems {
        tracing::warn!(
            document = problem.document,
            key = %problem.key,
            reason = %problem.reason,
            "Seed record breaks a store invariant"
        );
    }
    if !problems.is_empty() {
        tracing::warn!(count = problems.len(), "Serving with invalid seed records");
    }

    Ok(seed.into_ledger())
}

#[tokio::main]
async fn main() {
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Sentry first so the tracing layer has a client to report to
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let ledger = load_ledger(&config)
        .await
        .expect("Failed to load seed data");
    let addr = config.socket_addr();

    let app = order_refunds_api::app(AppState::new(ledger))
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Refund API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl+C received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}

//! Standalone GraphQL API server binary.
//!
//! ## Purpose
//! Runs the injury report GraphQL server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging when you only want the
//! GraphQL server (with the GraphiQL playground on `/`). The workspace's main
//! `reports-run` binary is the normal entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_graphql::routes::seed_enabled;
use api_graphql::{serve, shared_store};
use reports_core::ReportStore;

/// Main entry point for the standalone GraphQL API server.
///
/// # Environment Variables
/// - `REPORTS_GQL_ADDR`: Server address (default: "0.0.0.0:4000")
/// - `REPORTS_SEED`: Set to `0`/`false` to start with an empty store
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_graphql=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("REPORTS_GQL_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());

    let store = if seed_enabled(std::env::var("REPORTS_SEED").ok()) {
        ReportStore::seeded()
    } else {
        ReportStore::new()
    };

    tracing::info!(
        "-- Starting injury report GraphQL API on {} ({} reports seeded)",
        addr,
        store.count()
    );

    serve(&addr, shared_store(store)).await
}

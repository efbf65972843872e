use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_graphql::routes::seed_enabled;
use api_graphql::{serve, shared_store};
use reports_core::ReportStore;

/// Main entry point for the injury report service.
///
/// Starts the GraphQL API server on the configured address and serves it
/// until the process is stopped. CRUD operations over the in-memory report
/// store are exposed as GraphQL queries and mutations; a GraphiQL playground
/// is available on `/`.
///
/// # Environment Variables
/// - `REPORTS_GQL_ADDR`: GraphQL server address (default: "0.0.0.0:4000")
/// - `REPORTS_SEED`: Set to `0`/`false` to start with an empty store
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reports_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("REPORTS_GQL_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());

    let store = if seed_enabled(std::env::var("REPORTS_SEED").ok()) {
        ReportStore::seeded()
    } else {
        ReportStore::new()
    };

    tracing::info!("++ Starting injury report GraphQL API on {}", addr);
    tracing::info!("store initialised with {} reports", store.count());

    serve(&addr, shared_store(store)).await
}

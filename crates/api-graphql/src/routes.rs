//! axum routes and server startup.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::schema::{build_schema, AppSchema, SharedStore};

/// Health check response body.
#[derive(Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Builds the API router: GraphQL endpoint, GraphiQL playground on `/`, and
/// a health check.
pub fn router(store: SharedStore) -> Router {
    let schema = build_schema(store);

    Router::new()
        .route("/", get(graphiql))
        .route("/graphql", post(graphql_handler))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

/// Binds `addr` and serves the API until the process is stopped.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails
/// while running.
pub async fn serve(addr: &str, store: SharedStore) -> anyhow::Result<()> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse the seed toggle from an optional `REPORTS_SEED` env value.
///
/// Unset or empty means seeding is enabled; `0`, `false`, `no` or `off`
/// (any case) disable it.
pub fn seed_enabled(value: Option<String>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => true,
        Some(v) if v.is_empty() => true,
        Some(v) => !matches!(v.as_str(), "0" | "false" | "no" | "off"),
    }
}

async fn graphql_handler(State(schema): State<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Injury report GraphQL API is alive".into(),
    })
}

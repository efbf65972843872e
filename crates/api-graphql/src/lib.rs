//! # API GraphQL
//!
//! GraphQL schema and HTTP binding for the injury report service.
//!
//! Contains:
//! - Query and mutation roots over the core [`reports_core::ReportStore`]
//! - The custom `Date` scalar (raw string in, canonical display string out)
//! - The axum router with the `/graphql` endpoint, GraphiQL playground and
//!   health check
//!
//! The store is held behind one `tokio::sync::RwLock`; the core assumes
//! serialized mutations and this crate is where that assumption is enforced.

pub mod mutation;
pub mod query;
pub mod routes;
pub mod scalar;
pub mod schema;
pub mod types;

pub use routes::{router, serve};
pub use schema::{build_schema, shared_store, AppSchema, SharedStore};

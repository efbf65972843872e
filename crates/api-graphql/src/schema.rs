//! Schema construction and shared state.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use tokio::sync::RwLock;

use crate::mutation::MutationRoot;
use crate::query::QueryRoot;
use reports_core::ReportStore;

/// The report store as shared by all resolvers.
///
/// The core store has no internal locking; every resolver goes through this
/// single lock so mutations stay serialized.
pub type SharedStore = Arc<RwLock<ReportStore>>;

/// The complete GraphQL schema type.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Wraps a store for sharing across resolvers.
pub fn shared_store(store: ReportStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// Builds the schema with `store` installed as resolver context data.
pub fn build_schema(store: SharedStore) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

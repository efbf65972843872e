//! Query resolvers.

use async_graphql::{Context, Object, Result as GqlResult, ID};

use crate::schema::SharedStore;
use crate::types::InjuryReport;
use reports_core::{ReportFilter, ReportId};

/// Root type for all GraphQL queries.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All reports, optionally filtered by exact author name and/or raw date
    /// string. Both filters together mean logical AND. Order is insertion
    /// order.
    async fn all_reports(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        date: Option<String>,
    ) -> GqlResult<Vec<InjuryReport>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        let filter = ReportFilter { name, date };
        Ok(store.list(&filter).into_iter().map(Into::into).collect())
    }

    /// Point lookup by id. Null for a missing (or non-canonical) id.
    async fn injury_report(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<InjuryReport>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(ReportId::parse(&id)
            .ok()
            .and_then(|id| store.get(&id).cloned())
            .map(Into::into))
    }

    /// Current number of reports.
    async fn report_count(&self, ctx: &Context<'_>) -> GqlResult<usize> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.count())
    }
}

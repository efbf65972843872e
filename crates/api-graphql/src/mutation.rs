//! Mutation resolvers.
//!
//! The duplicate-id rejection is the service's one user-facing validation
//! error and surfaces with `BAD_USER_INPUT` extensions carrying the
//! conflicting id. Edit/delete on a missing id resolve to null data, not
//! errors; callers distinguish "no record" from a record with empty fields.

use async_graphql::{Context, Error, ErrorExtensions, Object, Result as GqlResult, ID};

use crate::scalar::Date;
use crate::schema::SharedStore;
use crate::types::{new_report, BodyMapInput, InjuryReport};
use reports_core::{ReportError, ReportId};

/// Root type for all GraphQL mutations.
pub struct MutationRoot;

fn bad_user_input(message: impl Into<String>, invalid_args: &str) -> Error {
    let invalid_args = invalid_args.to_string();
    Error::new(message.into()).extend_with(|_, e| {
        e.set("code", "BAD_USER_INPUT");
        e.set("invalidArgs", invalid_args.clone());
    })
}

#[Object]
impl MutationRoot {
    /// Creates a new report and returns it.
    ///
    /// The id is server-assigned unless `id` is supplied; a supplied id that
    /// already exists is rejected before anything is inserted.
    async fn add_report(
        &self,
        ctx: &Context<'_>,
        name: String,
        date: Date,
        body_map: Vec<BodyMapInput>,
        id: Option<ID>,
    ) -> GqlResult<InjuryReport> {
        let explicit_id = match &id {
            Some(raw) => match ReportId::parse(raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => return Err(bad_user_input(err.to_string(), raw)),
            },
            None => None,
        };

        let mut store = ctx.data::<SharedStore>()?.write().await;
        match store.add(new_report(name, date, body_map), explicit_id) {
            Ok(report) => Ok(report.into()),
            Err(ReportError::DuplicateId { id }) => {
                tracing::warn!(id = %id, "rejected duplicate report id");
                Err(bad_user_input("Id must be unique", &id.to_string()))
            }
            Err(err) => Err(Error::new(err.to_string())),
        }
    }

    /// Replaces the report with `id` wholesale and returns the replacement.
    /// Null when no such report exists (nothing is edited).
    async fn edit_report(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        date: Date,
        body_map: Vec<BodyMapInput>,
    ) -> GqlResult<Option<InjuryReport>> {
        let Ok(target) = ReportId::parse(&id) else {
            return Ok(None);
        };

        let mut store = ctx.data::<SharedStore>()?.write().await;
        Ok(store
            .edit(&target, new_report(name, date, body_map))
            .map(Into::into))
    }

    /// Removes the report with `id` and returns it for confirmation. Null
    /// when no such report exists.
    async fn delete_report(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<InjuryReport>> {
        let Ok(target) = ReportId::parse(&id) else {
            return Ok(None);
        };

        let mut store = ctx.data::<SharedStore>()?.write().await;
        Ok(store.delete(&target).map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{build_schema, shared_store, AppSchema};
    use reports_core::ReportStore;

    fn seeded_schema() -> AppSchema {
        build_schema(shared_store(ReportStore::seeded()))
    }

    const ADD: &str = r#"
        mutation {
          addReport(
            name: "Kalle Ilves"
            date: "10/19/2023"
            bodyMap: [{ id: "1", label: 1, details: "Right Arm" }]
          ) {
            id
            name
            date
            bodyMap { id label details }
          }
        }
    "#;

    #[tokio::test]
    async fn test_add_report_assigns_id_and_preserves_fields() {
        let schema = seeded_schema();
        let resp = schema.execute(ADD).await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        let report = &data["addReport"];
        assert_eq!(report["name"], "Kalle Ilves");
        assert_eq!(report["date"], "Thu Oct 19 2023");
        assert_eq!(report["bodyMap"][0]["details"], "Right Arm");
        // Server-assigned id is a canonical UUID
        let id = report["id"].as_str().unwrap();
        assert!(reports_core::ReportId::is_canonical(id));

        let count = schema.execute("{ reportCount }").await;
        assert_eq!(count.data.into_json().unwrap()["reportCount"], 4);
    }

    #[tokio::test]
    async fn test_add_report_honours_explicit_fresh_id() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  addReport(
                    name: "Kalle Ilves"
                    date: "10/19/2023"
                    bodyMap: []
                    id: "9f0c1c2a-0000-4000-8000-000000000001"
                  ) { id }
                }"#,
            )
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["addReport"]["id"], "9f0c1c2a-0000-4000-8000-000000000001");
    }

    #[tokio::test]
    async fn test_add_report_duplicate_id_is_bad_user_input() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  addReport(
                    name: "Kalle Ilves"
                    date: "10/19/2023"
                    bodyMap: []
                    id: "3d594650-3436-11e9-bc57-8b80ba54c431"
                  ) { id }
                }"#,
            )
            .await;

        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "Id must be unique");
        let error = serde_json::to_value(&resp.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "BAD_USER_INPUT");
        assert_eq!(
            error["extensions"]["invalidArgs"],
            "3d594650-3436-11e9-bc57-8b80ba54c431"
        );

        // Store left unchanged
        let count = schema.execute("{ reportCount }").await;
        assert_eq!(count.data.into_json().unwrap()["reportCount"], 3);
    }

    #[tokio::test]
    async fn test_add_report_non_canonical_explicit_id_is_bad_user_input() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  addReport(name: "X", date: "10/19/2023", bodyMap: [], id: "1") { id }
                }"#,
            )
            .await;

        assert_eq!(resp.errors.len(), 1);
        let error = serde_json::to_value(&resp.errors[0]).unwrap();
        assert_eq!(error["extensions"]["code"], "BAD_USER_INPUT");
    }

    #[tokio::test]
    async fn test_edit_report_replaces_fields_preserving_id() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  editReport(
                    id: "3d599470-3436-11e9-bc57-8b80ba54c431"
                    name: "Matti Luukkainen"
                    date: "10/20/2023"
                    bodyMap: [{ id: "1", label: 5, details: "Right Foot" }]
                  ) {
                    id
                    date
                    bodyMap { label details }
                  }
                }"#,
            )
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        let edited = &data["editReport"];
        assert_eq!(edited["id"], "3d599470-3436-11e9-bc57-8b80ba54c431");
        assert_eq!(edited["date"], "Fri Oct 20 2023");
        assert_eq!(edited["bodyMap"][0]["label"], 5);

        let count = schema.execute("{ reportCount }").await;
        assert_eq!(count.data.into_json().unwrap()["reportCount"], 3);
    }

    #[tokio::test]
    async fn test_edit_report_missing_id_returns_null_not_error() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  editReport(
                    id: "00000000-0000-0000-0000-000000000000"
                    name: "Nobody"
                    date: "10/20/2023"
                    bodyMap: []
                  ) { id }
                }"#,
            )
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["editReport"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_delete_report_returns_removed_record() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  deleteReport(id: "3d599470-3436-11e9-bc57-8b80ba54c431") { name }
                }"#,
            )
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["deleteReport"]["name"], "Matti Luukkainen");

        let count = schema.execute("{ reportCount }").await;
        assert_eq!(count.data.into_json().unwrap()["reportCount"], 2);

        let gone = schema
            .execute(r#"{ injuryReport(id: "3d599470-3436-11e9-bc57-8b80ba54c431") { name } }"#)
            .await;
        assert_eq!(
            gone.data.into_json().unwrap()["injuryReport"],
            serde_json::Value::Null
        );
    }

    #[tokio::test]
    async fn test_delete_report_missing_id_is_noop_returning_null() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                  deleteReport(id: "00000000-0000-0000-0000-000000000000") { name }
                }"#,
            )
            .await;

        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["deleteReport"], serde_json::Value::Null);

        let count = schema.execute("{ reportCount }").await;
        assert_eq!(count.data.into_json().unwrap()["reportCount"], 3);
    }
}

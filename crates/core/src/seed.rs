//! Development seed data.
//!
//! Three well-known reports used by the binaries on startup (unless disabled
//! via `REPORTS_SEED`) and by tests as a common fixture.

use crate::id::ReportId;
use crate::report::{BodyMapArea, Report};
use crate::store::ReportStore;

fn area(id: &str, label: i32, details: &str) -> BodyMapArea {
    BodyMapArea {
        id: id.into(),
        label,
        details: details.into(),
    }
}

/// Returns the development fixture reports in their canonical order.
pub fn seed_reports() -> Vec<Report> {
    // Literal ids are valid hyphenated UUIDs, so parse cannot fail.
    let id = |raw: &str| ReportId::parse(raw).expect("seed ids are canonical UUIDs");

    vec![
        Report {
            id: id("3d599471-3436-11e9-bc57-8b80ba54c431"),
            name: "Venla Ruuska".into(),
            date: "10/18/2023".into(),
            body_map: vec![area("1", 1, "Left Hand"), area("2", 2, "Left Foot")],
        },
        Report {
            id: id("3d594650-3436-11e9-bc57-8b80ba54c431"),
            name: "Arto Hellas".into(),
            date: "10/16/2023".into(),
            body_map: vec![area("1", 1, "right Hand"), area("2", 2, "left Foot")],
        },
        Report {
            id: id("3d599470-3436-11e9-bc57-8b80ba54c431"),
            name: "Matti Luukkainen".into(),
            date: "10/17/2023".into(),
            body_map: vec![area("1", 1, "Left Leg"), area("2", 2, "Left Arm")],
        },
    ]
}

impl ReportStore {
    /// Creates a store pre-populated with the development fixtures.
    pub fn seeded() -> Self {
        Self::with_reports(seed_reports())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let reports = seed_reports();
        let unique: std::collections::HashSet<_> =
            reports.iter().map(|r| r.id.clone()).collect();

        assert_eq!(unique.len(), reports.len());
    }

    #[test]
    fn test_seeded_store_holds_fixtures_in_order() {
        let store = ReportStore::seeded();

        assert_eq!(store.count(), 3);
        let names: Vec<_> = store
            .list(&crate::store::ReportFilter::none())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Venla Ruuska", "Arto Hellas", "Matti Luukkainen"]);
    }
}

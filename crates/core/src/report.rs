//! Injury report records.
//!
//! A [`Report`] is the sole entity in the system: an author/subject name, a
//! calendar date (kept as the raw caller-supplied string; see
//! [`crate::date`]), and a structured body map with one entry per marked
//! body area.

use crate::id::ReportId;
use serde::{Deserialize, Serialize};

/// One marked body area within a report's body map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyMapArea {
    pub id: String,
    pub label: i32,
    pub details: String,
}

/// An injury report record.
///
/// Immutable once constructed except through the store's edit operation,
/// which replaces the record wholesale while preserving its identifier and
/// sequence position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    /// Raw date string as supplied by the caller; formatted for display only
    /// at the API boundary.
    pub date: String,
    pub body_map: Vec<BodyMapArea>,
}

/// The id-less field set accepted by the store's add and edit operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub name: String,
    pub date: String,
    pub body_map: Vec<BodyMapArea>,
}

impl NewReport {
    /// Constructs the stored record for this field set under `id`.
    pub(crate) fn into_report(self, id: ReportId) -> Report {
        Report {
            id,
            name: self.name,
            date: self.date,
            body_map: self.body_map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_camel_case_body_map() {
        let report = Report {
            id: ReportId::parse("3d594650-3436-11e9-bc57-8b80ba54c431").unwrap(),
            name: "Arto Hellas".into(),
            date: "10/16/2023".into(),
            body_map: vec![BodyMapArea {
                id: "1".into(),
                label: 1,
                details: "right Hand".into(),
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["id"], "3d594650-3436-11e9-bc57-8b80ba54c431");
        assert_eq!(json["bodyMap"][0]["details"], "right Hand");
    }

    #[test]
    fn test_into_report_preserves_fields() {
        let id = ReportId::new();
        let fields = NewReport {
            name: "Venla Ruuska".into(),
            date: "10/18/2023".into(),
            body_map: vec![],
        };

        let report = fields.clone().into_report(id.clone());
        assert_eq!(report.id, id);
        assert_eq!(report.name, fields.name);
        assert_eq!(report.date, fields.date);
        assert!(report.body_map.is_empty());
    }
}

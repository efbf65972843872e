//! GraphQL object and input types.
//!
//! These mirror the core record types one-to-one; the conversions keep the
//! core crate free of GraphQL derives.

use async_graphql::{InputObject, SimpleObject, ID};

use crate::scalar::Date;
use reports_core::report::{BodyMapArea as StoredArea, NewReport, Report};

/// One marked body area within a report.
#[derive(SimpleObject)]
pub struct BodyMapArea {
    pub id: ID,
    pub label: i32,
    pub details: String,
}

/// An injury report as exposed over GraphQL.
#[derive(SimpleObject)]
pub struct InjuryReport {
    pub id: ID,
    pub name: String,
    pub date: Date,
    pub body_map: Vec<BodyMapArea>,
}

/// Input form of a body map entry.
#[derive(InputObject)]
pub struct BodyMapInput {
    pub id: ID,
    pub label: i32,
    pub details: String,
}

impl From<StoredArea> for BodyMapArea {
    fn from(area: StoredArea) -> Self {
        Self {
            id: ID(area.id),
            label: area.label,
            details: area.details,
        }
    }
}

impl From<BodyMapInput> for StoredArea {
    fn from(input: BodyMapInput) -> Self {
        Self {
            id: input.id.0,
            label: input.label,
            details: input.details,
        }
    }
}

impl From<Report> for InjuryReport {
    fn from(report: Report) -> Self {
        Self {
            id: ID(report.id.to_string()),
            name: report.name,
            date: Date(report.date),
            body_map: report.body_map.into_iter().map(Into::into).collect(),
        }
    }
}

/// Assembles the store-facing field set from mutation arguments.
pub(crate) fn new_report(name: String, date: Date, body_map: Vec<BodyMapInput>) -> NewReport {
    NewReport {
        name,
        date: date.0,
        body_map: body_map.into_iter().map(Into::into).collect(),
    }
}

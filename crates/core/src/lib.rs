//! # Reports Core
//!
//! Core business logic for the injury report service.
//!
//! This crate contains pure data operations with no transport concerns:
//! - The in-memory [`ReportStore`] and its query/mutation contract
//! - Typed report identifiers ([`ReportId`])
//! - Best-effort date parsing and canonical display formatting
//! - Development seed data
//!
//! **No API concerns**: GraphQL schema, HTTP serving, or wire serialization
//! belong in `api-graphql`.

pub mod date;
pub mod error;
pub mod id;
pub mod report;
pub mod seed;
pub mod store;

pub use error::{ReportError, ReportResult};
pub use id::ReportId;
pub use report::{BodyMapArea, NewReport, Report};
pub use store::{ReportFilter, ReportStore};

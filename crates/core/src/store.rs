//! The in-memory report store.
//!
//! [`ReportStore`] owns the authoritative, insertion-ordered sequence of
//! reports and serves every read/write operation against it. It is an
//! explicit object passed by handle into the API layer, never module-level
//! state.
//!
//! ## Concurrency
//!
//! The store assumes effectively serialized execution: each operation runs to
//! completion before the next is considered, and mutations rebuild state
//! without any internal locking. Multi-threaded callers must wrap the store
//! in a single mutual-exclusion lock (the GraphQL layer uses one
//! `tokio::sync::RwLock` for this).

use crate::error::{ReportError, ReportResult};
use crate::id::ReportId;
use crate::report::{NewReport, Report};

/// Optional exact-match filters for [`ReportStore::list`].
///
/// `date` is compared against the stored raw string, not a parsed date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub name: Option<String>,
    pub date: Option<String>,
}

impl ReportFilter {
    /// A filter that matches every report.
    pub fn none() -> Self {
        Self::default()
    }

    fn matches(&self, report: &Report) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|n| report.name == n);
        let date_ok = self.date.as_deref().is_none_or(|d| report.date == d);
        name_ok && date_ok
    }
}

/// The authoritative in-memory sequence of injury reports.
///
/// Insertion appends; edit replaces in place; delete removes. Results are
/// owned copies, never aliases of internal storage.
#[derive(Clone, Debug, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
}

impl ReportStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `reports` in the given order.
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Returns every report matching `filter`, preserving insertion order.
    ///
    /// Both filter fields present means logical AND; no fields means the full
    /// sequence. Never fails; the result may be empty.
    pub fn list(&self, filter: &ReportFilter) -> Vec<Report> {
        self.reports
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Point lookup by identifier. `None` for a missing id, never an error.
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|r| &r.id == id)
    }

    /// Current number of reports.
    pub fn count(&self) -> usize {
        self.reports.len()
    }

    /// Adds a new report and returns the created record.
    ///
    /// Ids are server-assigned (fresh v4) unless `explicit_id` is given, in
    /// which case it is honoured when unique. Existence is checked *before*
    /// insertion; on a collision the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuplicateId`] if `explicit_id` names an
    /// existing report.
    pub fn add(&mut self, fields: NewReport, explicit_id: Option<ReportId>) -> ReportResult<Report> {
        let id = match explicit_id {
            Some(id) => {
                if self.get(&id).is_some() {
                    return Err(ReportError::DuplicateId { id });
                }
                id
            }
            None => ReportId::new(),
        };

        let report = fields.into_report(id);
        self.reports.push(report.clone());
        tracing::debug!(id = %report.id, "added report");
        Ok(report)
    }

    /// Replaces the report with `id` wholesale, preserving its identifier and
    /// sequence position, and returns the replacement.
    ///
    /// Returns `None` when no report has that id; the store is untouched and
    /// callers must treat this as "no-op, nothing edited", not an error.
    pub fn edit(&mut self, id: &ReportId, fields: NewReport) -> Option<Report> {
        let slot = self.reports.iter_mut().find(|r| &r.id == id)?;
        let replacement = fields.into_report(slot.id.clone());
        *slot = replacement.clone();
        tracing::debug!(id = %id, "edited report");
        Some(replacement)
    }

    /// Removes the report with `id` and returns it for caller confirmation.
    ///
    /// Returns `None` when no report has that id; a no-op, not an error.
    pub fn delete(&mut self, id: &ReportId) -> Option<Report> {
        let pos = self.reports.iter().position(|r| &r.id == id)?;
        let removed = self.reports.remove(pos);
        tracing::debug!(id = %id, "deleted report");
        Some(removed)
    }
}

//! Report identifiers.
//!
//! Every report is keyed by a UUID in *canonical* text form: **36 lowercase
//! characters, hyphenated** (the standard RFC 4122 rendering, e.g.
//! `3d594650-3436-11e9-bc57-8b80ba54c431`).
//!
//! This module provides a small wrapper type ([`ReportId`]) that guarantees
//! the canonical format once constructed:
//! - [`ReportId::new`] allocates a fresh v4 identifier for new reports.
//! - [`ReportId::parse`] validates an externally supplied identifier (for
//!   example, from an API argument).
//!
//! Identifiers are generated, never derived from the current store length.
//! A length-based scheme collides as soon as a deletion is followed by an
//! insertion, so ids must stay globally unique for the process lifetime.

use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A validated report identifier in canonical hyphenated form.
///
/// Once constructed, the contained UUID is guaranteed to be valid; `Display`
/// always produces the lowercase hyphenated rendering.
///
/// # Construction
/// - [`ReportId::new`] generates a new identifier (for new reports).
/// - [`ReportId::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`ReportId::parse`] returns [`ReportError::InvalidId`] if the input is not
/// already canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Generates a new v4 identifier in canonical form.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// This does **not** normalise other UUID renderings (uppercase, simple
    /// 32-hex, urn-prefixed). Callers must provide the canonical hyphenated
    /// lowercase form.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidId`] if `input` is not canonical.
    pub fn parse(input: &str) -> ReportResult<Self> {
        if Self::is_canonical(input) {
            // SAFETY: is_canonical guarantees valid hex layout, so parse_str succeeds
            let uuid = Uuid::parse_str(input).expect("is_canonical guarantees valid UUID");
            return Ok(Self(uuid));
        }
        Err(ReportError::InvalidId(input.to_string()))
    }

    /// Returns true if `input` is in canonical hyphenated lowercase form.
    ///
    /// Purely syntactic: 36 bytes, hyphens at offsets 8/13/18/23, lowercase
    /// hex everywhere else.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 36
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReportId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportId::parse(s)
    }
}

//! Report date handling.
//!
//! Dates cross the API boundary as plain text. The store keeps the raw
//! caller-supplied string (filtering compares raw strings), and only the
//! display path goes through a parser.
//!
//! The input-parse and output-format paths are deliberately independent pure
//! functions rather than one overloaded conversion: [`parse`] coerces known
//! text forms into a [`NaiveDate`], [`format`] renders a [`NaiveDate`] into
//! the canonical display string.

use chrono::NaiveDate;

/// Placeholder rendered for dates that do not parse.
///
/// Best-effort coercion never fails a request; an unknown format degrades to
/// this fixed string on output.
pub const INVALID_DATE: &str = "Invalid Date";

/// Input formats accepted by [`parse`], tried in order.
const INPUT_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%d.%m.%Y"];

/// Best-effort parse of a caller-supplied date string.
///
/// Accepts `M/D/YYYY` (the format the seed data uses), ISO `YYYY-MM-DD` and
/// `D.M.YYYY`. Returns `None` for anything else; never panics.
pub fn parse(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Renders a date in the canonical display form, e.g. `Mon Oct 16 2023`.
pub fn format(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Parse-then-format convenience for the output boundary.
///
/// Unparseable input degrades to [`INVALID_DATE`] rather than failing.
pub fn display(raw: &str) -> String {
    match parse(raw) {
        Some(date) => format(date),
        None => INVALID_DATE.to_string(),
    }
}

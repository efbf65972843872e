//! The custom `Date` scalar.
//!
//! The input-parse and output-serialize paths are independent: parsing
//! accepts any string and keeps it raw (the store filters on raw strings),
//! serializing runs the raw string through the core date formatter to produce
//! the canonical display form. An unparseable stored date serializes as the
//! `Invalid Date` placeholder rather than erroring.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use reports_core::date;

/// A report date as it crosses the GraphQL boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Date(pub String);

#[Scalar]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(raw) => Ok(Date(raw)),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(date::display(&self.0))
    }
}

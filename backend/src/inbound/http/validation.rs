//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query parameters are deserialized as raw strings and parsed here rather
//! than through extractor-level typed fields, so a malformed value produces
//! the API's own failure envelope instead of the framework default.

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_integer_error(field: FieldName) -> Error {
    Error::invalid_request(format!("{} must be an integer", field.as_str()))
}

pub(crate) fn blank_segment_error(field: FieldName) -> Error {
    Error::invalid_request(format!("{} must not be blank", field.as_str()))
}

/// Parse a query parameter as a signed integer.
///
/// Surrounding whitespace is tolerated; any other non-numeric content,
/// including fractional values, is rejected.
pub(crate) fn parse_int_param(value: &str, field: FieldName) -> Result<i64, Error> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_integer_error(field))
}

pub(crate) fn parse_optional_int_param(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<i64>, Error> {
    value.map(|raw| parse_int_param(raw, field)).transpose()
}

/// Require a non-blank path segment, returning it trimmed.
pub(crate) fn require_path_segment(value: &str, field: FieldName) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(blank_segment_error(field));
    }
    Ok(trimmed.to_owned())
}

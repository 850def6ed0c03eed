//! Error taxonomy for context validation and rendering

use thiserror::Error;

/// Failures raised while validating or rendering a report context.
///
/// Both variants are local validation failures: they surface to the caller
/// immediately and rendering can simply be retried with a corrected payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A required context field is absent or blank.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A date value could not be parsed or formatted.
    #[error("malformed date: {value}")]
    MalformedDate { value: String },
}

impl ReportError {
    pub fn missing(field: &'static str) -> Self {
        ReportError::MissingField { field }
    }

    pub fn malformed_date(value: impl Into<String>) -> Self {
        ReportError::MalformedDate {
            value: value.into(),
        }
    }
}

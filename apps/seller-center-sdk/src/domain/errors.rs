//! Domain validation errors.

use thiserror::Error;

/// A value fell outside one of the fixed enumerations the API accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: '{value}'")]
pub struct InvalidValue {
    /// Name of the enumeration that rejected the value.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidValue {
    pub(crate) fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

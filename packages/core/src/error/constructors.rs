//! Error constructors
//!
//! Shorthands used across the crate so call sites stay on one line.

use serde_json::Value as JsonValue;

use super::types::StructError;

impl StructError {
    /// Type error naming the shape of the rejected JSON value
    #[must_use]
    pub fn type_mismatch(found: &JsonValue) -> Self {
        let found = match found {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        };
        Self::Type { found }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn argument(name: impl Into<String>, given: usize) -> Self {
        Self::Argument {
            name: name.into(),
            given,
        }
    }

    pub fn no_accessor(name: impl Into<String>) -> Self {
        Self::NoAccessor { name: name.into() }
    }

    pub fn invalid_separator(separator: impl Into<String>) -> Self {
        Self::InvalidSeparator {
            separator: separator.into(),
        }
    }

    /// Whether this error reports a lookup miss on deletion
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

//! Query configuration

use serde::{Deserialize, Serialize};

use crate::error::{StructError, StructResult};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: &str = "/";

/// Options for [`PathFinder`](super::PathFinder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Segment separator; doubled it becomes the any-depth marker
    pub separator: String,
}

impl FindOptions {
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Check the separator can split a path unambiguously
    ///
    /// # Errors
    ///
    /// Returns `StructError::InvalidSeparator` if the separator is empty or
    /// contains whitespace (segments are trimmed, so whitespace could never
    /// act as a boundary).
    pub fn validate(&self) -> StructResult<()> {
        if self.separator.is_empty() || self.separator.chars().any(char::is_whitespace) {
            return Err(StructError::invalid_separator(&self.separator));
        }
        Ok(())
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

//! Deepstruct Public API
//!
//! Searchable, recursively wrapped attribute structs. Wrap parsed JSON once,
//! then read it with keyed or named access, query it with paths like
//! `array//two`, and export it back to plain data or JSON text.
//!
//! ```rust
//! use deepstruct::prelude::*;
//! use serde_json::json;
//!
//! let data = deepstruct::wrap(json!({
//!     "object": { "a": "bau bau" },
//!     "array": [{ "oneTwo": 12 }]
//! }))?;
//!
//! assert_eq!(data.query("//a").first(), Some(Value::from("bau bau")));
//! assert_eq!(data.export().camelize_keys().to_json()?, r#"{"object":{"a":"bau bau"},"array":[{"oneTwo":12}]}"#);
//! # Ok::<(), StructError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the core package
pub use deepstruct_core::{
    DeepStruct, ExportOptions, FindOptions, PathFinder, PathGroup, PathQuery, PathSegment,
    Primitive, Searchable, StructError, StructResult, Value,
};

use serde_json::Value as JsonValue;

/// Everything needed for day-to-day use, builders and extension traits included
pub mod prelude {
    pub use crate::Deep;
    pub use crate::builder::{Export, ExportBuilder, Query, QueryBuilder, StructBuilder};
    pub use deepstruct_core::prelude::*;
}

/// Main entry point providing static constructors
pub struct Deep;

impl Deep {
    /// Start a fluent construction
    ///
    /// Shorthand for `StructBuilder::new()`
    #[must_use]
    pub fn builder() -> StructBuilder {
        StructBuilder::new()
    }

    /// Wrap parsed JSON deeply
    ///
    /// # Errors
    ///
    /// Returns `StructError::Type` if `json` is not an object or `null`.
    pub fn wrap(json: JsonValue) -> StructResult<DeepStruct> {
        wrap(json)
    }
}

/// Wrap parsed JSON, turning every nested object into a struct
///
/// # Errors
///
/// Returns `StructError::Type` if `json` is not an object or `null`.
pub fn wrap(json: JsonValue) -> StructResult<DeepStruct> {
    DeepStruct::try_from_json(&json)
}

/// Wrap parsed JSON one level deep, keeping nested containers verbatim
///
/// # Errors
///
/// Returns `StructError::Type` if `json` is not an object or `null`.
pub fn wrap_shallow(json: JsonValue) -> StructResult<DeepStruct> {
    DeepStruct::try_from_json_with(&json, false)
}

/// First value in `target` matching `path` (default `/` separator)
#[must_use]
pub fn find(target: &DeepStruct, path: &str) -> Option<Value> {
    target.find(path)
}

//! Struct Error Types
//!
//! Core error type for container construction, mutation and export.

/// Errors surfaced by [`DeepStruct`](crate::DeepStruct) operations
#[derive(Debug, thiserror::Error)]
pub enum StructError {
    /// Construction input does not support pairwise iteration
    #[error("cannot build a struct from {found}: expected a mapping")]
    Type {
        /// Shape of the rejected input (`array`, `string`, ...)
        found: &'static str,
    },

    /// Deletion of a key that was never set
    #[error("no field `{key}` in struct")]
    NotFound {
        /// Key as given by the caller
        key: String,
    },

    /// A setter invoked with other than exactly one value
    #[error("wrong number of arguments for `{name}` ({given} for 1)")]
    Argument {
        /// Setter name including the trailing `=`
        name: String,
        /// Number of values supplied
        given: usize,
    },

    /// A dynamic accessor call with arguments that does not name a setter
    #[error("undefined accessor `{name}` taking arguments")]
    NoAccessor {
        /// Accessor name as given
        name: String,
    },

    /// Path separator rejected by [`FindOptions::validate`](crate::FindOptions::validate)
    #[error("invalid path separator {separator:?}")]
    InvalidSeparator {
        /// The rejected separator
        separator: String,
    },

    /// The struct (transitively) contains itself and has no plain form
    #[error("struct contains a reference to itself and cannot be exported")]
    CyclicReference,

    /// JSON serialization failure
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for struct operations
pub type StructResult<T> = Result<T, StructError>;

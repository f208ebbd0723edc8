//! Canonical types for everyday use
//!
//! `use deepstruct_core::prelude::*;` brings in the container, the value
//! model, export and query options, and the error type.

pub use crate::deep_struct::DeepStruct;
pub use crate::error::{StructError, StructResult};
pub use crate::export::ExportOptions;
pub use crate::path_finder::{FindOptions, PathQuery, PathSegment};
pub use crate::search::Searchable;
pub use crate::value::{Primitive, Value};

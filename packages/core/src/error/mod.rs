//! Error handling for the deep struct container
//!
//! Only contract violations are errors: construction from a non-mapping,
//! deleting a key that was never set, setter arity mismatches, invalid query
//! configuration and exporting a cyclic struct. Lookups that find nothing
//! return `None` instead.

mod constructors;
mod types;

pub use types::{StructError, StructResult};

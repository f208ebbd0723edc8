//! Fluent builders
//!
//! Construction, export and query each get a small chained builder over
//! the core operations.

pub mod core;
pub mod export;
pub mod query;

pub use self::core::*;
pub use export::*;
pub use query::*;

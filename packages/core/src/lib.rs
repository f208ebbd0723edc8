//! # Deepstruct Core
//!
//! Recursive attribute container that wraps nested JSON-shaped data and keeps
//! wrapping as you go deeper. Every nested mapping becomes a [`DeepStruct`],
//! every sequence has its mapping elements wrapped, and the whole tree can be
//! searched with a small path language and exported back to plain data.
//!
//! ## Features
//!
//! - **Recursive wrapping** of nested mappings and sequences
//! - **Canonical keys** (snake_case) with literal fallback for keys that are
//!   not identifiers (`"two words"`, `"Name"`)
//! - **Deep search** (`dig_deep`) that retries a full path at every level
//! - **Path queries** (`find("array//two")`) with an any-depth marker
//! - **Lossless export** to `serde_json::Value` and JSON text with key
//!   camelization and value filtering
//! - **Cycle-safe** inspection, equality and hashing
//!
//! ## Usage
//!
//! ```rust
//! use deepstruct_core::prelude::*;
//! use serde_json::json;
//!
//! let data = DeepStruct::try_from_json(&json!({
//!     "object": { "a": "bau bau", "c": "boo boo" },
//!     "array": [{ "one": 1, "two": 2 }],
//!     "two words": "Foo bar"
//! }))?;
//!
//! assert_eq!(data.find("//a"), Some(Value::from("bau bau")));
//! assert_eq!(data.find("array//two"), Some(Value::from(2)));
//! assert_eq!(data.find("//four"), None);
//! # Ok::<(), StructError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod deep_struct;
pub mod error;
pub mod export;
pub mod keys;
pub mod path_finder;
pub mod search;
pub mod value;

pub mod prelude;

pub use crate::deep_struct::DeepStruct;
pub use crate::error::{StructError, StructResult};
pub use crate::export::ExportOptions;
pub use crate::path_finder::{FindOptions, PathFinder, PathGroup, PathQuery, PathSegment};
pub use crate::search::Searchable;
pub use crate::value::{Primitive, Value};

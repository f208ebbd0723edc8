//! Path queries over a struct
//!
//! A path such as `array//two` is split into *groups* on runs of two or more
//! separators (the any-depth marker) and each group into typed *segments* on
//! the single separator. The first group is resolved exactly from the top of
//! the struct; every later group is searched for at any depth below the
//! previous result.
//!
//! ```rust
//! use deepstruct_core::prelude::*;
//! use serde_json::json;
//!
//! let data = DeepStruct::try_from_json(&json!({
//!     "object": { "a": "bau bau", "c": "boo boo" },
//!     "array": [{ "one": 1, "two": 2, "three": 3 }],
//!     "two words": "Foo bar"
//! }))?;
//!
//! assert_eq!(data.find("object/c"), Some(Value::from("boo boo")));
//! assert_eq!(data.find("//one"), Some(Value::from(1)));
//! assert_eq!(data.find("array/0/three"), Some(Value::from(3)));
//! assert_eq!(data.find("//two words"), Some(Value::from("Foo bar")));
//! assert_eq!(data.find("object/b"), None);
//! # Ok::<(), StructError>(())
//! ```

mod evaluator;
mod options;
mod parser;
mod segment;

pub use evaluator::PathFinder;
pub use options::FindOptions;
pub use parser::{PathGroup, PathQuery};
pub use segment::PathSegment;

use crate::deep_struct::DeepStruct;
use crate::value::Value;

impl DeepStruct {
    /// First value matching `path` with the default `/` separator
    ///
    /// `None` when nothing matches or the path is empty.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<Value> {
        PathFinder::find(self, path, &FindOptions::default())
    }

    /// First value matching `path` under the given options
    ///
    /// An invalid separator is logged and yields `None`.
    #[must_use]
    pub fn find_with(&self, path: &str, options: &FindOptions) -> Option<Value> {
        PathFinder::find(self, path, options)
    }

    /// First value matching an already parsed query
    #[must_use]
    pub fn find_query(&self, query: &PathQuery) -> Option<Value> {
        PathFinder::evaluate(self, query)
    }
}

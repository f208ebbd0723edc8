//! `QueryBuilder`: fluent path queries

use deepstruct_core::{DeepStruct, FindOptions, PathQuery, StructResult, Value};

/// A path query bound to a struct, with an adjustable separator
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    target: &'a DeepStruct,
    path: String,
    options: FindOptions,
}

impl<'a> QueryBuilder<'a> {
    #[must_use]
    pub fn new(target: &'a DeepStruct, path: impl Into<String>) -> Self {
        Self {
            target,
            path: path.into(),
            options: FindOptions::default(),
        }
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// First matching value, `None` if nothing matches
    #[must_use]
    pub fn first(self) -> Option<Value> {
        self.target.find_with(&self.path, &self.options)
    }

    /// First matching value, with configuration errors surfaced
    ///
    /// # Errors
    ///
    /// Returns `StructError::InvalidSeparator` if the separator is invalid.
    pub fn try_first(self) -> StructResult<Option<Value>> {
        let query = PathQuery::parse_with(&self.path, &self.options)?;
        Ok(self.target.find_query(&query))
    }

    /// Whether anything matches
    #[must_use]
    pub fn exists(self) -> bool {
        self.first().is_some()
    }
}

/// Entry points for fluent queries
pub trait Query {
    /// Start a query for `path`
    fn query(&self, path: impl Into<String>) -> QueryBuilder<'_>;
}

impl Query for DeepStruct {
    fn query(&self, path: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, path)
    }
}

//! Query evaluation
//!
//! The root group is dug exactly from the top-level table. Each any-depth
//! group is searched with `dig_deep` below the previous result when that
//! result supports nested lookup, and below the whole struct otherwise.

use super::options::FindOptions;
use super::parser::PathQuery;
use crate::deep_struct::DeepStruct;
use crate::search::Searchable;
use crate::value::Value;

/// Stateless path query engine
pub struct PathFinder;

impl PathFinder {
    /// Parse `path` under `options` and evaluate it against `root`
    ///
    /// Never fails: an invalid separator is logged and treated as no match.
    #[must_use]
    pub fn find(root: &DeepStruct, path: &str, options: &FindOptions) -> Option<Value> {
        match PathQuery::parse_with(path, options) {
            Ok(query) => Self::evaluate(root, &query),
            Err(e) => {
                log::warn!("path {path:?} not searched: {e}");
                None
            }
        }
    }

    /// Evaluate a parsed query against `root`
    #[must_use]
    pub fn evaluate(root: &DeepStruct, query: &PathQuery) -> Option<Value> {
        let first = query.root()?;

        let mut result = if first.is_empty() {
            None
        } else {
            root.dig(first.segments())
        };
        tracing::trace!(found = result.is_some(), "resolved root group");

        for group in query.any_depth_groups() {
            result = match result.as_ref().and_then(Value::as_searchable) {
                Some(scope) => scope.dig_deep(group.segments()),
                None => {
                    tracing::trace!("previous result not searchable, searching from the top");
                    root.dig_deep(group.segments())
                }
            };
        }

        tracing::debug!(query = %query, found = result.is_some(), "path query evaluated");
        result
    }
}

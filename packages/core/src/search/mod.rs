//! Nested lookup and deep search
//!
//! [`Searchable::dig`] follows a path exactly: keys index struct tables,
//! integer indices index sequences (negative counts from the end). Any step
//! that does not apply ends the lookup with `None`.
//!
//! [`Searchable::dig_deep`] first tries `dig`. When that finds nothing it
//! retries the *same full path* against every immediate child that supports
//! nested lookup, in iteration order, recursing depth-first and returning the
//! first hit. A present nil (`Some(Value::Nil)`) is a hit.

use hashbrown::HashSet;

use crate::deep_struct::DeepStruct;
use crate::path_finder::PathSegment;
use crate::value::Value;

/// A value that supports nested lookup
///
/// Implemented by [`DeepStruct`] and by sequences (`Vec<Value>`). Use
/// [`Value::as_searchable`] to check the capability of an arbitrary value.
pub trait Searchable {
    /// Exact nested lookup
    fn dig(&self, path: &[PathSegment]) -> Option<Value>;

    /// Exact lookup, falling back to a depth-first search of descendants
    fn dig_deep(&self, path: &[PathSegment]) -> Option<Value>;
}

impl Searchable for DeepStruct {
    fn dig(&self, path: &[PathSegment]) -> Option<Value> {
        let (first, rest) = path.split_first()?;
        let child = struct_step(self, first)?;
        dig_value(&child, rest)
    }

    fn dig_deep(&self, path: &[PathSegment]) -> Option<Value> {
        dig_deep_struct(self, path, &mut HashSet::new())
    }
}

impl Searchable for Vec<Value> {
    fn dig(&self, path: &[PathSegment]) -> Option<Value> {
        let (first, rest) = path.split_first()?;
        let child = sequence_step(self, first)?;
        dig_value(&child, rest)
    }

    fn dig_deep(&self, path: &[PathSegment]) -> Option<Value> {
        dig_deep_sequence(self, path, &mut HashSet::new())
    }
}

fn struct_step(s: &DeepStruct, segment: &PathSegment) -> Option<Value> {
    match segment {
        PathSegment::Key(key) => s.get_exact(key),
        PathSegment::Index(_) => None,
    }
}

fn sequence_step(items: &[Value], segment: &PathSegment) -> Option<Value> {
    match segment {
        PathSegment::Index(index) => resolve_index(items.len(), *index).map(|i| items[i].clone()),
        PathSegment::Key(_) => None,
    }
}

/// Position addressed by `index`, counting from the end when negative
fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let position = if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)?
    } else {
        usize::try_from(index).ok()?
    };
    (position < len).then_some(position)
}

fn dig_value(value: &Value, path: &[PathSegment]) -> Option<Value> {
    let Some((first, rest)) = path.split_first() else {
        return Some(value.clone());
    };

    let child = match value {
        Value::Struct(s) => struct_step(s, first)?,
        Value::Sequence(items) => sequence_step(items, first)?,
        Value::Nil | Value::Primitive(_) => return None,
    };
    dig_value(&child, rest)
}

fn dig_deep_value(value: &Value, path: &[PathSegment], visited: &mut HashSet<usize>) -> Option<Value> {
    match value {
        Value::Struct(s) => dig_deep_struct(s, path, visited),
        Value::Sequence(items) => dig_deep_sequence(items, path, visited),
        Value::Nil | Value::Primitive(_) => None,
    }
}

fn dig_deep_struct(s: &DeepStruct, path: &[PathSegment], visited: &mut HashSet<usize>) -> Option<Value> {
    if path.is_empty() {
        return None;
    }

    // a struct already on the search stack has been tried with this path
    let id = s.id();
    if visited.contains(&id) {
        return None;
    }

    if let Some(hit) = s.dig(path) {
        return Some(hit);
    }

    visited.insert(id);
    let found = {
        let table = s.table();
        table
            .entries
            .values()
            .find_map(|child| dig_deep_value(child, path, visited))
    };
    visited.remove(&id);
    found
}

fn dig_deep_sequence(items: &[Value], path: &[PathSegment], visited: &mut HashSet<usize>) -> Option<Value> {
    let (first, rest) = path.split_first()?;
    if let Some(hit) = sequence_step(items, first).and_then(|child| dig_value(&child, rest)) {
        return Some(hit);
    }

    items
        .iter()
        .find_map(|child| dig_deep_value(child, path, visited))
}

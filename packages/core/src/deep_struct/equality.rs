//! Structural equality and hashing
//!
//! Two structs are equal when their tables hold the same keys with equal
//! values, regardless of insertion order. Comparison is co-inductive: a pair
//! of structs already being compared further up the stack is taken as equal,
//! so self-referencing structs compare without unbounded recursion.
//!
//! Hashing looks one level into a struct (keys and leaf values, nested
//! structs by size only). Equal structs always share that shape, which keeps
//! `Hash` consistent with `Eq` without having to walk cycles.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde_json::Value as JsonValue;

use super::core::DeepStruct;
use crate::value::{Primitive, Value};

type VisitedPairs = Vec<(usize, usize)>;

impl DeepStruct {
    fn eq_with(&self, other: &DeepStruct, visited: &mut VisitedPairs) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let pair = (self.id(), other.id());
        if visited.contains(&pair) {
            return true;
        }

        let left = self.table();
        let right = other.table();
        if left.entries.len() != right.entries.len() {
            return false;
        }

        visited.push(pair);
        let equal = left.entries.iter().all(|(key, value)| {
            right
                .entries
                .get(key)
                .is_some_and(|theirs| value.eq_with(theirs, visited))
        });
        visited.pop();
        equal
    }
}

impl Value {
    fn eq_with(&self, other: &Value, visited: &mut VisitedPairs) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a.eq_with(b, visited),
            (Value::Sequence(a), Value::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_with(y, visited))
            }
            _ => false,
        }
    }

    /// Hash without looking inside nested structs
    fn shallow_hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Primitive(p) => p.hash(state),
            Value::Struct(s) => s.len().hash(state),
            Value::Sequence(items) => {
                items.len().hash(state);
                for item in items {
                    item.shallow_hash(state);
                }
            }
        }
    }
}

impl PartialEq for DeepStruct {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, &mut Vec::new())
    }
}

impl Eq for DeepStruct {}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, &mut Vec::new())
    }
}

impl Eq for Value {}

impl Hash for DeepStruct {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let table = self.table();
        // entry hashes are summed so insertion order does not matter
        let combined = table.entries.iter().fold(0u64, |acc, (key, value)| {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.shallow_hash(&mut entry);
            acc.wrapping_add(entry.finish())
        });
        table.entries.len().hash(state);
        combined.hash(state);
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Struct(s) => {
                std::mem::discriminant(self).hash(state);
                s.hash(state);
            }
            other => other.shallow_hash(state),
        }
    }
}

impl Hash for Primitive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Primitive::Bool(b) => b.hash(state),
            Primitive::Number(n) => n.hash(state),
            Primitive::String(s) => s.hash(state),
            // equal JSON values always share kind and size
            Primitive::Json(json) => match json {
                JsonValue::Array(items) => items.len().hash(state),
                JsonValue::Object(map) => map.len().hash(state),
                other => other.to_string().hash(state),
            },
        }
    }
}

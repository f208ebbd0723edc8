//! Attribute value model
//!
//! Every attribute is one of four shapes, and all shape-dependent behavior
//! (search, export, inspection) dispatches on the tag:
//!
//! - [`Value::Nil`]: present but empty
//! - [`Value::Primitive`]: a leaf ([`Primitive`])
//! - [`Value::Struct`]: a nested [`DeepStruct`]
//! - [`Value::Sequence`]: an ordered sequence whose mapping elements are structs
//!
//! Absence is never a `Value`. Lookups return `Option<Value>`, so `None`
//! (absent) and `Some(Value::Nil)` (present but nil) stay distinguishable.

mod conversions;

use serde_json::{Number, Value as JsonValue};

use crate::deep_struct::DeepStruct;
use crate::search::Searchable;

/// A leaf attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// `true` / `false`
    Bool(bool),
    /// Integer or finite float
    Number(Number),
    /// Text
    String(String),
    /// JSON container kept verbatim
    ///
    /// Produced by shallow construction and by `From` conversions of plain
    /// JSON. A deep struct wraps it on assignment; otherwise it is opaque to
    /// `dig` and `dig_deep`.
    Json(JsonValue),
}

/// A wrapped attribute value
#[derive(Clone, Default)]
pub enum Value {
    /// Present but nil
    #[default]
    Nil,
    /// Leaf value
    Primitive(Primitive),
    /// Nested struct (shared handle)
    Struct(DeepStruct),
    /// Ordered sequence
    Sequence(Vec<Value>),
}

impl Value {
    #[inline]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub fn as_struct(&self) -> Option<&DeepStruct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Primitive(Primitive::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Primitive(Primitive::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Nested-lookup capability of this value
    ///
    /// Structs and sequences can be searched; leaves and nil cannot.
    #[must_use]
    pub fn as_searchable(&self) -> Option<&dyn Searchable> {
        match self {
            Value::Struct(s) => Some(s as &dyn Searchable),
            Value::Sequence(items) => Some(items as &dyn Searchable),
            Value::Nil | Value::Primitive(_) => None,
        }
    }

    /// Short name of the value's shape, used in diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Primitive(Primitive::Bool(_)) => "boolean",
            Value::Primitive(Primitive::Number(_)) => "number",
            Value::Primitive(Primitive::String(_)) => "string",
            Value::Primitive(Primitive::Json(_)) => "json",
            Value::Struct(_) => "struct",
            Value::Sequence(_) => "sequence",
        }
    }

    /// Wrap a plain JSON value the way construction does
    ///
    /// With `deep` set, objects become structs and arrays are wrapped
    /// element by element. Without it, containers are kept verbatim as
    /// [`Primitive::Json`] leaves.
    #[must_use]
    pub fn wrap(json: &JsonValue, deep: bool) -> Self {
        conversions::wrap(json, deep)
    }
}

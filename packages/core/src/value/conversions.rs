//! Conversions into [`Value`]
//!
//! Wrapping plain JSON is where the deep invariant is established: objects
//! turn into structs and arrays are mapped element by element. Plain JSON
//! converted with `From` is not wrapped yet; the struct that stores it
//! decides how deep to go.

use serde_json::{Map, Number, Value as JsonValue};

use super::{Primitive, Value};
use crate::deep_struct::DeepStruct;

pub(super) fn wrap(json: &JsonValue, deep: bool) -> Value {
    match json {
        JsonValue::Null => Value::Nil,
        JsonValue::Bool(b) => Value::Primitive(Primitive::Bool(*b)),
        JsonValue::Number(n) => Value::Primitive(Primitive::Number(n.clone())),
        JsonValue::String(s) => Value::Primitive(Primitive::String(s.clone())),
        JsonValue::Object(map) if deep => Value::Struct(DeepStruct::from_map_with(map, true)),
        JsonValue::Array(items) if deep => {
            Value::Sequence(items.iter().map(|item| wrap(item, true)).collect())
        }
        container => Value::Primitive(Primitive::Json(container.clone())),
    }
}

/// Containers stay opaque [`Primitive::Json`] leaves until a struct stores
/// them, which wraps them with its own depth
impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Object(_) | JsonValue::Array(_) => Value::Primitive(Primitive::Json(json)),
            leaf => wrap(&leaf, false),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        wrap(json, false)
    }
}

impl From<Map<String, JsonValue>> for Value {
    fn from(map: Map<String, JsonValue>) -> Self {
        Value::Primitive(Primitive::Json(JsonValue::Object(map)))
    }
}

impl From<DeepStruct> for Value {
    fn from(s: DeepStruct) -> Self {
        Value::Struct(s)
    }
}

impl From<&DeepStruct> for Value {
    fn from(s: &DeepStruct) -> Self {
        Value::Struct(s.clone())
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Json(JsonValue::Null) => Value::Nil,
            p => Value::Primitive(p),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Nil, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::String(s))
    }
}

/// Non-finite floats have no JSON form and become `Nil`
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Nil, |n| Value::Primitive(Primitive::Number(n)))
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Primitive(Primitive::Number(Number::from(n)))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

//! Export configuration

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Options for converting a struct back to plain data
///
/// `Default` is the plain-object export: keys as stored, nothing filtered.
/// [`ExportOptions::json_defaults`] is what `to_json_default` uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Rewrite non-literal keys to lowerCamel
    pub camelize_keys: bool,
    /// Drop entries whose value is `null`, `""`, `{}` or `[]`
    pub exclude_blank_values: bool,
    /// Drop entries whose converted value equals one of these
    ///
    /// Numbers compare by value, so `0` also drops `0.0`.
    pub values_to_exclude: Vec<JsonValue>,
}

impl ExportOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for JSON export
    ///
    /// Camelized keys, blank values dropped, and `0`, `[""]` and `[{}]`
    /// excluded.
    #[must_use]
    pub fn json_defaults() -> Self {
        Self {
            camelize_keys: true,
            exclude_blank_values: true,
            values_to_exclude: vec![json!(0), json!([""]), json!([{}])],
        }
    }

    #[must_use]
    pub fn camelize_keys(mut self, enabled: bool) -> Self {
        self.camelize_keys = enabled;
        self
    }

    #[must_use]
    pub fn exclude_blank_values(mut self, enabled: bool) -> Self {
        self.exclude_blank_values = enabled;
        self
    }

    #[must_use]
    pub fn values_to_exclude(mut self, values: Vec<JsonValue>) -> Self {
        self.values_to_exclude = values;
        self
    }

    #[must_use]
    pub fn exclude_value(mut self, value: impl Into<JsonValue>) -> Self {
        self.values_to_exclude.push(value.into());
        self
    }

    /// Whether an entry with this converted value is dropped
    pub(crate) fn rejects(&self, value: &JsonValue) -> bool {
        (self.exclude_blank_values && is_blank(value))
            || self
                .values_to_exclude
                .iter()
                .any(|excluded| same_value(excluded, value))
    }
}

/// Structural equality where numbers compare by numeric value (`0 == 0.0`)
#[allow(clippy::float_cmp)]
fn same_value(left: &JsonValue, right: &JsonValue) -> bool {
    match (left, right) {
        (JsonValue::Number(a), JsonValue::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) if a.is_f64() || b.is_f64() => x == y,
            _ => a == b,
        },
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_value(x, y))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| same_value(x, y)))
        }
        _ => left == right,
    }
}

/// `null`, `""`, `{}` and `[]` are blank; `0` and `false` are not
#[must_use]
pub fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}

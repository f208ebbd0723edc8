//! Conversion back to plain data and JSON text
//!
//! Conversion recurses first and filters afterwards: a nested struct is
//! converted (and filtered by its own entries) before its parent decides
//! whether to keep it. Filtering only ever drops mapping entries; sequence
//! elements are converted but always kept.

mod options;

pub use options::{ExportOptions, is_blank};

use serde_json::{Map, Value as JsonValue};

use crate::deep_struct::DeepStruct;
use crate::error::{StructError, StructResult};
use crate::keys::export_key;
use crate::value::{Primitive, Value};

/// Which key an exported entry is written under
#[derive(Clone, Copy)]
enum KeySource {
    /// Stored (canonical) key, camelized if the options ask for it
    Stored,
    /// Key as the caller last gave it
    Raw,
}

struct Exporter<'a> {
    options: &'a ExportOptions,
    keys: KeySource,
    visited: Vec<usize>,
}

impl<'a> Exporter<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            options,
            keys: KeySource::Stored,
            visited: Vec::new(),
        }
    }

    fn raw(options: &'a ExportOptions) -> Self {
        Self {
            keys: KeySource::Raw,
            ..Self::new(options)
        }
    }

    fn convert_struct(&mut self, s: &DeepStruct) -> StructResult<Map<String, JsonValue>> {
        let id = s.id();
        if self.visited.contains(&id) {
            return Err(StructError::CyclicReference);
        }

        self.visited.push(id);
        let converted = self.convert_entries(s);
        self.visited.pop();
        converted
    }

    fn convert_entries(&mut self, s: &DeepStruct) -> StructResult<Map<String, JsonValue>> {
        let table = s.table();
        let mut plain = Map::with_capacity(table.entries.len());
        for (key, value) in &table.entries {
            let converted = self.convert_value(value)?;
            if self.options.rejects(&converted) {
                continue;
            }
            let name = match self.keys {
                KeySource::Stored => export_key(key, self.options.camelize_keys),
                KeySource::Raw => table.raw_keys.get(key).unwrap_or(key).clone(),
            };
            plain.insert(name, converted);
        }
        Ok(plain)
    }

    fn convert_value(&mut self, value: &Value) -> StructResult<JsonValue> {
        Ok(match value {
            Value::Nil => JsonValue::Null,
            Value::Primitive(Primitive::Bool(b)) => JsonValue::Bool(*b),
            Value::Primitive(Primitive::Number(n)) => JsonValue::Number(n.clone()),
            Value::Primitive(Primitive::String(s)) => JsonValue::String(s.clone()),
            Value::Primitive(Primitive::Json(json)) => json.clone(),
            Value::Struct(s) => JsonValue::Object(self.convert_struct(s)?),
            Value::Sequence(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|item| self.convert_value(item))
                    .collect::<StructResult<_>>()?,
            ),
        })
    }
}

impl DeepStruct {
    /// Convert to a plain `serde_json` object tree
    ///
    /// ```rust
    /// use deepstruct_core::{DeepStruct, ExportOptions};
    /// use serde_json::json;
    ///
    /// let source = json!({ "name": "Barry", "alias": "", "byLightning": { "be": "The Flash" } });
    /// let data = DeepStruct::try_from_json(&source)?;
    ///
    /// let plain = data.to_plain_object(&ExportOptions::default())?;
    /// assert_eq!(plain, json!({ "name": "Barry", "alias": "", "by_lightning": { "be": "The Flash" } }));
    ///
    /// let options = ExportOptions::new().camelize_keys(true).exclude_blank_values(true);
    /// let plain = data.to_plain_object(&options)?;
    /// assert_eq!(plain, json!({ "name": "Barry", "byLightning": { "be": "The Flash" } }));
    /// # Ok::<(), deepstruct_core::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if the struct contains itself.
    pub fn to_plain_object(&self, options: &ExportOptions) -> StructResult<JsonValue> {
        self.to_plain_map(options).map(JsonValue::Object)
    }

    /// [`to_plain_object`](Self::to_plain_object) without the outer `Value`
    ///
    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if the struct contains itself.
    pub fn to_plain_map(&self, options: &ExportOptions) -> StructResult<Map<String, JsonValue>> {
        Exporter::new(options).convert_struct(self)
    }

    /// Raw, un-wrapped mapping this struct mirrors
    ///
    /// Assembled from the current entries under the keys as the caller gave
    /// them, so changes made through nested handles show up here too.
    ///
    /// ```rust
    /// use deepstruct_core::DeepStruct;
    /// use serde_json::{Value, json};
    ///
    /// let data = DeepStruct::try_from_json(&json!({ "homeTown": { "name": "Tokyo" } }))?;
    /// if let Some(town) = data.get("homeTown").and_then(|v| v.as_struct().cloned()) {
    ///     town.set("name", "Kyoto");
    /// }
    /// assert_eq!(Value::Object(data.original()?), json!({ "homeTown": { "name": "Kyoto" } }));
    /// # Ok::<(), deepstruct_core::StructError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if the struct contains itself.
    pub fn original(&self) -> StructResult<Map<String, JsonValue>> {
        Exporter::raw(&ExportOptions::default()).convert_struct(self)
    }

    /// Serialize to JSON text
    ///
    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` for self-referencing structs,
    /// or `StructError::Json` if serialization fails.
    pub fn to_json(&self, options: &ExportOptions) -> StructResult<String> {
        let plain = self.to_plain_object(options)?;
        Ok(serde_json::to_string(&plain)?)
    }

    /// Serialize to JSON text with [`ExportOptions::json_defaults`]
    ///
    /// # Errors
    ///
    /// See [`to_json`](Self::to_json).
    pub fn to_json_default(&self) -> StructResult<String> {
        self.to_json(&ExportOptions::json_defaults())
    }
}

impl Value {
    /// Convert a single value to plain JSON
    ///
    /// Entry filtering applies inside nested structs; a top-level leaf is
    /// returned as-is.
    ///
    /// # Errors
    ///
    /// Returns `StructError::CyclicReference` if a nested struct contains
    /// itself.
    pub fn to_plain(&self, options: &ExportOptions) -> StructResult<JsonValue> {
        Exporter::new(options).convert_value(self)
    }
}

//! `StructBuilder`: fluent construction of a [`DeepStruct`]
//!
//! Collects a source mapping, a wrapping depth and extra attributes, then
//! wraps everything in one go with [`StructBuilder::build`].

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use deepstruct_core::{DeepStruct, StructError, StructResult, Value};

/// Fluent construction of a [`DeepStruct`]
///
/// ```rust
/// use deepstruct::StructBuilder;
/// use serde_json::json;
///
/// let person = StructBuilder::new()
///     .with_json(json!({ "name": "Barry Allen" }))
///     .attr("byLightning", json!({ "be": "The Flash" }))
///     .build()?;
///
/// assert_eq!(person.find("by_lightning/be").and_then(|v| v.as_str().map(String::from)), Some("The Flash".into()));
/// # Ok::<(), deepstruct::StructError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StructBuilder {
    source: Option<JsonValue>,
    attributes: Vec<(String, JsonValue)>,
    deep: bool,
}

impl StructBuilder {
    /// Empty builder with deep wrapping
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            attributes: Vec::new(),
            deep: true,
        }
    }

    /// Use `json` as the source mapping
    #[must_use]
    pub fn with_json(mut self, json: JsonValue) -> Self {
        self.source = Some(json);
        self
    }

    /// Use a plain map as the source mapping
    #[must_use]
    pub fn with_map(mut self, map: Map<String, JsonValue>) -> Self {
        self.source = Some(JsonValue::Object(map));
        self
    }

    /// Use any serializable value as the source mapping
    ///
    /// # Errors
    ///
    /// Returns `StructError::Json` if `value` cannot be serialized.
    pub fn with_serialized<T: Serialize>(self, value: &T) -> StructResult<Self> {
        let json = serde_json::to_value(value).map_err(StructError::from)?;
        Ok(self.with_json(json))
    }

    /// Keep nested containers verbatim instead of wrapping them
    #[must_use]
    pub fn shallow(mut self) -> Self {
        self.deep = false;
        self
    }

    /// Set wrapping depth explicitly
    #[must_use]
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Add an attribute, assigned after the source mapping is wrapped
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Wrap the source and apply the attributes in order
    ///
    /// # Errors
    ///
    /// Returns `StructError::Type` if the source is not an object or `null`.
    pub fn build(self) -> StructResult<DeepStruct> {
        let s = match &self.source {
            Some(json) => DeepStruct::try_from_json_with(json, self.deep)?,
            None => DeepStruct::try_from_json_with(&JsonValue::Null, self.deep)?,
        };

        for (key, value) in &self.attributes {
            s.set(key, Value::wrap(value, self.deep));
        }

        tracing::debug!(keys = s.len(), deep = self.deep, "built struct");
        Ok(s)
    }
}

impl Default for StructBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Core `DeepStruct` structure, construction and table mutation

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::error::{StructError, StructResult};
use crate::keys::{has_whitespace, is_accessor_name, normalize_key};
use crate::value::{Primitive, Value};

pub(crate) type JsonMap = Map<String, JsonValue>;

/// Backing storage shared by every handle to the same struct
pub(crate) struct Table {
    /// Wrapped attributes in insertion order
    pub(crate) entries: IndexMap<String, Value>,
    /// Key as last given by the caller, by stored key
    pub(crate) raw_keys: IndexMap<String, String>,
    /// Whether nested containers are wrapped on construction and assignment
    pub(crate) deep: bool,
}

/// Recursive, dynamically keyed attribute container
///
/// ```rust
/// use deepstruct_core::{DeepStruct, Value};
/// use serde_json::json;
///
/// let person = DeepStruct::try_from_json(&json!({
///     "name": "Matz",
///     "coding language": "ruby",
///     "homeTown": { "country": "Japan" }
/// }))?;
///
/// assert_eq!(person.get("name"), Some(Value::from("Matz")));
/// assert_eq!(person.get("coding language"), Some(Value::from("ruby")));
/// // identifier-like keys are stored in snake_case
/// assert!(person.contains_key("home_town"));
/// assert_eq!(person.to_string(), "#<DeepStruct name=\"Matz\", coding language=\"ruby\", home_town=#<DeepStruct country=\"Japan\">>");
/// # Ok::<(), deepstruct_core::StructError>(())
/// ```
#[derive(Clone)]
pub struct DeepStruct {
    inner: Rc<RefCell<Table>>,
}

impl DeepStruct {
    /// Empty struct with deep wrapping enabled
    #[must_use]
    pub fn new() -> Self {
        Self::empty(true)
    }

    fn empty(deep: bool) -> Self {
        Self::with_table(IndexMap::new(), IndexMap::new(), deep)
    }

    fn with_table(
        entries: IndexMap<String, Value>,
        raw_keys: IndexMap<String, String>,
        deep: bool,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Table {
                entries,
                raw_keys,
                deep,
            })),
        }
    }

    /// Build a struct from a plain mapping, wrapping nested containers
    ///
    /// The mapping is borrowed and copied; the caller's data is never touched.
    #[must_use]
    pub fn from_map(map: &JsonMap) -> Self {
        Self::from_map_with(map, true)
    }

    /// Build a struct from a plain mapping
    ///
    /// With `deep` unset, nested objects and arrays are stored verbatim as
    /// opaque JSON leaves instead of being wrapped.
    #[must_use]
    pub fn from_map_with(map: &JsonMap, deep: bool) -> Self {
        let mut entries = IndexMap::with_capacity(map.len());
        let mut raw_keys = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            let stored = normalize_key(key).into_owned();
            entries.insert(stored.clone(), Value::wrap(value, deep));
            raw_keys.insert(stored, key.clone());
        }
        Self::with_table(entries, raw_keys, deep)
    }

    /// Build a struct from any JSON value that supports pairwise iteration
    ///
    /// `null` yields an empty struct.
    ///
    /// # Errors
    ///
    /// Returns `StructError::Type` when `json` is not an object or `null`.
    pub fn try_from_json(json: &JsonValue) -> StructResult<Self> {
        Self::try_from_json_with(json, true)
    }

    /// [`try_from_json`](Self::try_from_json) with explicit wrapping depth
    ///
    /// # Errors
    ///
    /// Returns `StructError::Type` when `json` is not an object or `null`.
    pub fn try_from_json_with(json: &JsonValue, deep: bool) -> StructResult<Self> {
        match json {
            JsonValue::Object(map) => Ok(Self::from_map_with(map, deep)),
            JsonValue::Null => Ok(Self::empty(deep)),
            other => Err(StructError::type_mismatch(other)),
        }
    }

    /// Re-wrap an existing struct
    ///
    /// Produces a new table holding the same entries. Nested structs are
    /// already wrapped and pass through as-is, so wrapping twice is the same
    /// as wrapping once.
    #[must_use]
    pub fn from_struct(other: &DeepStruct) -> Self {
        let table = other.table();
        Self::with_table(table.entries.clone(), table.raw_keys.clone(), table.deep)
    }

    /// Independent copy of this struct's top-level table
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_struct(self)
    }

    #[inline]
    pub(crate) fn table(&self) -> Ref<'_, Table> {
        self.inner.borrow()
    }

    /// Identity of the shared table, stable for the lifetime of the struct
    #[inline]
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.inner).cast::<()>() as usize
    }

    /// Whether both handles point at the same table
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &DeepStruct) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether nested containers are wrapped on assignment
    #[must_use]
    pub fn is_deep(&self) -> bool {
        self.table().deep
    }

    /// Stored key for `key`: the raw key if present, else its canonical form
    fn resolve_key(&self, key: &str) -> Option<String> {
        let table = self.table();
        if table.entries.contains_key(key) {
            return Some(key.to_string());
        }
        let canonical = normalize_key(key);
        table
            .entries
            .contains_key(canonical.as_ref())
            .then(|| canonical.into_owned())
    }

    /// Value stored under `key`
    ///
    /// Tries the raw key first, then its canonical form. `None` means the key
    /// is absent; a stored nil comes back as `Some(Value::Nil)`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let table = self.table();
        if let Some(value) = table.entries.get(key) {
            return Some(value.clone());
        }
        table.entries.get(normalize_key(key).as_ref()).cloned()
    }

    /// Value stored under exactly `key`, without canonicalization
    #[must_use]
    pub fn get_exact(&self, key: &str) -> Option<Value> {
        self.table().entries.get(key).cloned()
    }

    /// Store `value` under the normalized form of `key`
    ///
    /// Plain JSON containers are wrapped exactly as on construction: a deep
    /// struct turns them into structs and sequences, a shallow one keeps them
    /// verbatim. Returns the key the value was stored under.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> String {
        let value = self.rewrap(value.into());
        let stored = normalize_key(key).into_owned();

        if let Some(previous) = self.get_exact(&stored) {
            if !previous.is_nil() && previous.kind() != value.kind() {
                log::warn!(
                    "assigning a {} to `{stored}` which held a {}",
                    value.kind(),
                    previous.kind()
                );
            }
        }

        tracing::trace!(key = %stored, kind = value.kind(), "storing attribute");
        let mut table = self.inner.borrow_mut();
        table.raw_keys.insert(stored.clone(), key.to_string());
        table.entries.insert(stored.clone(), value);
        stored
    }

    /// Store plain JSON under `key`, wrapped with this struct's depth
    ///
    /// On a shallow struct nested containers stay opaque leaves, on a deep
    /// one they are wrapped like construction does.
    pub fn set_json(&self, key: &str, json: &JsonValue) -> String {
        self.set(key, json)
    }

    /// Apply this struct's wrapping depth to an assigned value
    ///
    /// A deep struct wraps plain JSON containers, including those inside an
    /// assigned sequence. A shallow one stores the value as given.
    fn rewrap(&self, value: Value) -> Value {
        if self.is_deep() {
            wrap_plain(value)
        } else {
            value
        }
    }

    /// Remove `key` (raw or canonical) and return its value
    ///
    /// # Errors
    ///
    /// Returns `StructError::NotFound` if the key was never set; the struct
    /// is left untouched.
    pub fn delete(&self, key: &str) -> StructResult<Value> {
        let stored = self
            .resolve_key(key)
            .ok_or_else(|| StructError::not_found(key))?;

        let mut table = self.inner.borrow_mut();
        table.raw_keys.shift_remove(&stored);
        table
            .entries
            .shift_remove(&stored)
            .ok_or_else(|| StructError::not_found(key))
    }

    /// Whether `key` (raw or canonical) is stored
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.resolve_key(key).is_some()
    }

    /// Stored keys in insertion order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.table().entries.keys().cloned().collect()
    }

    /// Keys reachable through named access
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.table()
            .entries
            .keys()
            .filter(|k| is_accessor_name(k))
            .cloned()
            .collect()
    }

    /// Keys containing whitespace, only reachable through keyed lookup
    #[must_use]
    pub fn spaced_keys(&self) -> Vec<String> {
        self.table()
            .entries
            .keys()
            .filter(|k| has_whitespace(k))
            .cloned()
            .collect()
    }

    /// Stored values in insertion order
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.table().entries.values().cloned().collect()
    }

    /// Snapshot of every key/value pair in insertion order
    #[must_use]
    pub fn each_pair(&self) -> Vec<(String, Value)> {
        self.table()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table().entries.is_empty()
    }
}

fn wrap_plain(value: Value) -> Value {
    match value {
        Value::Primitive(Primitive::Json(json)) => Value::wrap(&json, true),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(wrap_plain).collect()),
        other => other,
    }
}

impl Default for DeepStruct {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<JsonValue> for DeepStruct {
    type Error = StructError;

    fn try_from(json: JsonValue) -> StructResult<Self> {
        Self::try_from_json(&json)
    }
}

impl TryFrom<&JsonValue> for DeepStruct {
    type Error = StructError;

    fn try_from(json: &JsonValue) -> StructResult<Self> {
        Self::try_from_json(json)
    }
}

impl From<JsonMap> for DeepStruct {
    fn from(map: JsonMap) -> Self {
        Self::from_map(&map)
    }
}

impl From<&JsonMap> for DeepStruct {
    fn from(map: &JsonMap) -> Self {
        Self::from_map(map)
    }
}

impl<K, V> FromIterator<(K, V)> for DeepStruct
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let s = DeepStruct::new();
        for (key, value) in iter {
            s.set(key.as_ref(), value);
        }
        s
    }
}

//! Named attribute access
//!
//! Named access is mapping-backed: there are no generated accessors, only a
//! getter/setter pair keyed by name and a dispatcher that interprets
//! `name` / `name=` calls the way a dynamic attribute object would.

use super::core::DeepStruct;
use crate::error::{StructError, StructResult};
use crate::keys::is_accessor_name;
use crate::value::Value;

impl DeepStruct {
    /// Read an attribute by accessor name (`obj.name`)
    ///
    /// Keys containing whitespace have no accessor and always read as `None`
    /// here; use [`get`](Self::get) for them.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Value> {
        if is_accessor_name(name) {
            self.get(name)
        } else {
            None
        }
    }

    /// Write an attribute by accessor name (`obj.name = value`)
    ///
    /// # Errors
    ///
    /// Returns `StructError::NoAccessor` if `name` is empty or contains
    /// whitespace. Nothing is stored in that case.
    pub fn set_attribute(&self, name: &str, value: impl Into<Value>) -> StructResult<String> {
        if !is_accessor_name(name) {
            return Err(StructError::no_accessor(name));
        }
        Ok(self.set(name, value))
    }

    /// Dispatch a dynamic accessor call
    ///
    /// `name=` with exactly one argument assigns and returns the assigned
    /// value. A bare `name` with no arguments reads the attribute (`Ok(None)`
    /// when unknown).
    ///
    /// # Errors
    ///
    /// - `StructError::Argument` if a setter gets other than one argument
    /// - `StructError::NoAccessor` if a getter gets arguments, or the name
    ///   cannot back an accessor
    pub fn call_accessor(&self, name: &str, args: &[Value]) -> StructResult<Option<Value>> {
        if let Some(field) = name.strip_suffix('=') {
            let [value] = args else {
                return Err(StructError::argument(name, args.len()));
            };
            self.set_attribute(field, value.clone())?;
            return Ok(Some(value.clone()));
        }

        if !args.is_empty() {
            return Err(StructError::no_accessor(name));
        }
        Ok(self.attribute(name))
    }

    /// Whether a getter or setter named `name` is backed by a stored key
    #[must_use]
    pub fn responds_to(&self, name: &str) -> bool {
        let field = name.strip_suffix('=').unwrap_or(name);
        is_accessor_name(field) && self.contains_key(field)
    }
}

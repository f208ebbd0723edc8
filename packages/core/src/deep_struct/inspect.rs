//! Human-readable rendering
//!
//! `#<DeepStruct key=value, other=value>`. A struct that is already being
//! rendered further up the stack prints as `#<DeepStruct ...>`. The visited
//! stack lives for one top-level call only.

use std::fmt::{self, Write};

use super::core::DeepStruct;
use crate::value::{Primitive, Value};

const TYPE_NAME: &str = "DeepStruct";

struct Inspector {
    visited: Vec<usize>,
}

impl Inspector {
    fn new() -> Self {
        Self {
            visited: Vec::new(),
        }
    }

    fn write_struct<W: Write>(&mut self, out: &mut W, s: &DeepStruct) -> fmt::Result {
        let id = s.id();
        if self.visited.contains(&id) {
            return write!(out, "#<{TYPE_NAME} ...>");
        }

        self.visited.push(id);
        let written = self.write_entries(out, s);
        self.visited.pop();
        written
    }

    fn write_entries<W: Write>(&mut self, out: &mut W, s: &DeepStruct) -> fmt::Result {
        write!(out, "#<{TYPE_NAME}")?;
        let table = s.table();
        for (index, (key, value)) in table.entries.iter().enumerate() {
            if index > 0 {
                out.write_char(',')?;
            }
            write!(out, " {key}=")?;
            self.write_value(out, value)?;
        }
        out.write_char('>')
    }

    fn write_value<W: Write>(&mut self, out: &mut W, value: &Value) -> fmt::Result {
        match value {
            Value::Nil => out.write_str("nil"),
            Value::Primitive(p) => write_primitive(out, p),
            Value::Struct(s) => self.write_struct(out, s),
            Value::Sequence(items) => {
                out.write_char('[')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.write_str(", ")?;
                    }
                    self.write_value(out, item)?;
                }
                out.write_char(']')
            }
        }
    }
}

fn write_primitive<W: Write>(out: &mut W, p: &Primitive) -> fmt::Result {
    match p {
        Primitive::Bool(b) => write!(out, "{b}"),
        Primitive::Number(n) => write!(out, "{n}"),
        Primitive::String(s) => write!(out, "{s:?}"),
        Primitive::Json(json) => write!(out, "{json}"),
    }
}

impl DeepStruct {
    /// Deterministic rendering of every key/value pair
    ///
    /// ```rust
    /// use deepstruct_core::DeepStruct;
    ///
    /// let foo = DeepStruct::new();
    /// assert_eq!(foo.inspect(), "#<DeepStruct>");
    ///
    /// foo.set("bar", 1);
    /// foo.set("et al.", 3);
    /// assert_eq!(foo.inspect(), "#<DeepStruct bar=1, et al.=3>");
    ///
    /// foo.set("me", foo.clone());
    /// assert_eq!(foo.inspect(), "#<DeepStruct bar=1, et al.=3, me=#<DeepStruct ...>>");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Value {
    /// Rendering used by `Display`: strings quoted, nil as `nil`
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeepStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().write_struct(f, self)
    }
}

impl fmt::Debug for DeepStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().write_value(f, self)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

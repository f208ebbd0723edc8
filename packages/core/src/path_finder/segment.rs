//! Typed path segments

use std::fmt;

use crate::keys::{is_literal_key, underscore};

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Sequence position; negative counts from the end
    Index(i64),
    /// Struct key, matched exactly
    Key(String),
}

impl PathSegment {
    /// Type a raw segment the way the path parser does
    ///
    /// Surrounding whitespace is trimmed. Integer-looking text becomes an
    /// index, literal keys (empty, containing whitespace, uppercase-leading)
    /// stay verbatim, anything else is canonicalized to snake_case.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if is_integer(text) {
            return Self::Index(parse_index(text));
        }
        Self::key(text)
    }

    /// Key segment, canonicalized unless literal
    #[must_use]
    pub fn key(name: &str) -> Self {
        if is_literal_key(name) {
            Self::Key(name.to_string())
        } else {
            Self::Key(underscore(name))
        }
    }

    /// Key segment kept verbatim
    #[must_use]
    pub fn literal(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    #[must_use]
    pub fn index(index: i64) -> Self {
        Self::Index(index)
    }

    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

/// `[-+]?\d+`
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Out-of-range indices saturate; they can never address an element
fn parse_index(text: &str) -> i64 {
    text.parse::<i64>().unwrap_or(if text.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

impl From<&str> for PathSegment {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<i64> for PathSegment {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

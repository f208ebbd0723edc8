//! Attribute key normalization
//!
//! Keys that look like identifiers are stored in snake_case so they can back
//! a named accessor. Keys that cannot be identifiers (empty, containing
//! whitespace, or starting with an uppercase letter) are literal: stored and
//! matched verbatim.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static ACRONYM_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static regex compiles")
});

static WORD_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z\d])([A-Z])").expect("static regex compiles")
});

static UNDERSCORE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_([A-Za-z\d]*)").expect("static regex compiles")
});

/// Whether `key` contains any whitespace
#[inline]
#[must_use]
pub fn has_whitespace(key: &str) -> bool {
    key.chars().any(char::is_whitespace)
}

/// Whether `key` must be kept verbatim instead of canonicalized
///
/// Empty keys, keys containing whitespace and keys starting with an ASCII
/// uppercase letter are literal.
#[must_use]
pub fn is_literal_key(key: &str) -> bool {
    match key.chars().next() {
        None => true,
        Some(first) => first.is_ascii_uppercase() || has_whitespace(key),
    }
}

/// Whether `key` can back a named accessor (`obj.key`, `obj.key = v`)
///
/// Anything non-empty without whitespace qualifies, including literal keys
/// such as `Name`.
#[must_use]
pub fn is_accessor_name(key: &str) -> bool {
    !key.is_empty() && !has_whitespace(key)
}

/// snake_case form of an identifier-like key
///
/// `byLightning` → `by_lightning`, `HTTPServer` → `http_server`,
/// `foo-bar` → `foo_bar`.
#[must_use]
pub fn underscore(key: &str) -> String {
    let step = ACRONYM_BOUNDARY.replace_all(key, "${1}_${2}");
    let step = WORD_BOUNDARY.replace_all(&step, "${1}_${2}");
    step.replace('-', "_").to_lowercase()
}

/// lowerCamel form of a snake_case key
///
/// `by_lightning` → `byLightning`. Each word after an underscore is
/// capitalized and the rest of it lowercased.
#[must_use]
pub fn camelize_lower(key: &str) -> String {
    let mut chars = key.chars();
    let head: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => return String::new(),
    };

    UNDERSCORE_WORD
        .replace_all(&head, |caps: &Captures<'_>| capitalize(&caps[1]))
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Storage form of an attribute key
///
/// Literal keys pass through untouched, everything else is canonicalized.
#[must_use]
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if is_literal_key(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(underscore(key))
    }
}

/// Export form of a stored key
///
/// Literal keys stay verbatim; with `camelize` set the rest become lowerCamel.
#[must_use]
pub fn export_key(key: &str, camelize: bool) -> String {
    if camelize && !is_literal_key(key) {
        camelize_lower(key)
    } else {
        key.to_string()
    }
}

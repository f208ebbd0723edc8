//! Path string parsing
//!
//! Splitting follows a few fixed rules:
//!
//! 1. one leading separator is dropped unless it is doubled, and any trailing
//!    run of separators is dropped;
//! 2. runs of two or more separators split the path into groups;
//! 3. each group splits on the single separator into segments, trailing
//!    empty pieces discarded;
//! 4. segments are typed by [`PathSegment::parse`].

use std::fmt;

use super::options::FindOptions;
use super::segment::PathSegment;
use crate::error::StructResult;

/// Segments resolved together, exactly, one after another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGroup {
    segments: Vec<PathSegment>,
}

impl PathGroup {
    #[must_use]
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A parsed path: a root group followed by any-depth groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    groups: Vec<PathGroup>,
    separator: String,
}

impl PathQuery {
    /// Parse with the default `/` separator
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::split(path, super::options::DEFAULT_SEPARATOR)
    }

    /// Parse with configured options
    ///
    /// # Errors
    ///
    /// Returns `StructError::InvalidSeparator` if the options do not validate.
    pub fn parse_with(path: &str, options: &FindOptions) -> StructResult<Self> {
        options.validate()?;
        Ok(Self::split(path, &options.separator))
    }

    fn split(path: &str, separator: &str) -> Self {
        let trimmed = strip_separators(path, separator);
        if trimmed.is_empty() {
            return Self {
                groups: Vec::new(),
                separator: separator.to_string(),
            };
        }

        let groups: Vec<PathGroup> = split_groups(trimmed, separator)
            .into_iter()
            .map(|group| {
                PathGroup::new(
                    split_segments(group, separator)
                        .into_iter()
                        .map(PathSegment::parse)
                        .collect(),
                )
            })
            .collect();

        tracing::debug!(path, groups = groups.len(), "parsed path query");
        Self {
            groups,
            separator: separator.to_string(),
        }
    }

    /// Every group, root first
    #[must_use]
    pub fn groups(&self) -> &[PathGroup] {
        &self.groups
    }

    /// Group resolved from the top of the struct
    ///
    /// Empty when the path started with the any-depth marker.
    #[must_use]
    pub fn root(&self) -> Option<&PathGroup> {
        self.groups.first()
    }

    /// Groups searched for at any depth
    #[must_use]
    pub fn any_depth_groups(&self) -> &[PathGroup] {
        self.groups.get(1..).unwrap_or_default()
    }

    /// Separator the path was split on
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Whether the path had nothing left after stripping separators
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, group) in self.groups.iter().enumerate() {
            if index > 0 {
                f.write_str(&self.separator)?;
                f.write_str(&self.separator)?;
            }
            for (position, segment) in group.segments.iter().enumerate() {
                if position > 0 {
                    f.write_str(&self.separator)?;
                }
                write!(f, "{segment}")?;
            }
        }
        Ok(())
    }
}

/// Drop one non-doubled leading separator and the trailing separator run
fn strip_separators<'a>(path: &'a str, separator: &str) -> &'a str {
    let mut rest = path;
    if let Some(after) = rest.strip_prefix(separator) {
        if !after.starts_with(separator) {
            rest = after;
        }
    }
    while let Some(before) = rest.strip_suffix(separator) {
        rest = before;
    }
    rest
}

/// Split on runs of two or more separators; leading empty group kept
fn split_groups<'a>(path: &'a str, separator: &str) -> Vec<&'a str> {
    let mut groups = Vec::new();
    let mut group_start = 0;
    let mut cursor = 0;

    while cursor < path.len() {
        if !path[cursor..].starts_with(separator) {
            cursor += path[cursor..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        let run_start = cursor;
        let mut run = 0;
        while path[cursor..].starts_with(separator) {
            cursor += separator.len();
            run += 1;
        }
        if run >= 2 {
            groups.push(&path[group_start..run_start]);
            group_start = cursor;
        }
    }

    groups.push(&path[group_start..]);
    groups
}

/// Split on the single separator, discarding trailing empty pieces
fn split_segments<'a>(group: &'a str, separator: &str) -> Vec<&'a str> {
    let mut pieces: Vec<&str> = group.split(separator).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> PathGroup {
        PathGroup::new(names.iter().map(|n| PathSegment::Key((*n).to_string())).collect())
    }

    #[test]
    fn strips_single_leading_and_trailing_separators() {
        assert_eq!(strip_separators("/object/c", "/"), "object/c");
        assert_eq!(strip_separators("//a", "/"), "//a");
        assert_eq!(strip_separators("a///", "/"), "a");
        assert_eq!(strip_separators("/", "/"), "");
        assert_eq!(strip_separators("///", "/"), "");
    }

    #[test]
    fn any_depth_marker_splits_groups() {
        assert_eq!(split_groups("//a", "/"), vec!["", "a"]);
        assert_eq!(split_groups("///a", "/"), vec!["", "a"]);
        assert_eq!(split_groups("array//two", "/"), vec!["array", "two"]);
        assert_eq!(split_groups("a/b////c/d", "/"), vec!["a/b", "c/d"]);
        assert_eq!(split_groups("a::b::::c", "::"), vec!["a::b", "c"]);
    }

    #[test]
    fn parses_root_and_any_depth_groups() {
        let query = PathQuery::parse("//a");
        assert_eq!(query.root(), Some(&PathGroup::default()));
        assert_eq!(query.any_depth_groups(), &[keys(&["a"])]);

        let query = PathQuery::parse("object/c");
        assert_eq!(query.groups(), &[keys(&["object", "c"])]);

        let query = PathQuery::parse("array/0//two");
        assert_eq!(
            query.root().map(PathGroup::segments),
            Some(&[PathSegment::Key("array".into()), PathSegment::Index(0)][..])
        );
    }

    #[test]
    fn empty_paths_have_no_groups() {
        assert!(PathQuery::parse("").is_empty());
        assert!(PathQuery::parse("/").is_empty());
        assert!(PathQuery::parse("////").is_empty());
    }

    #[test]
    fn custom_separator() {
        let options = FindOptions::new(".");
        let query = PathQuery::parse_with("object.c", &options).expect("valid separator");
        assert_eq!(query.groups(), &[keys(&["object", "c"])]);

        assert!(PathQuery::parse_with("a", &FindOptions::new("")).is_err());
        assert!(PathQuery::parse_with("a", &FindOptions::new(" ")).is_err());
    }

    #[test]
    fn displays_canonical_form() {
        assert_eq!(PathQuery::parse("/array//firstName").to_string(), "array//first_name");
        assert_eq!(PathQuery::parse("//a").to_string(), "//a");
    }

    #[test]
    fn displays_with_parsed_separator() {
        let query = PathQuery::parse_with("::store::::bookList::0", &FindOptions::new("::"))
            .expect("valid separator");
        assert_eq!(query.separator(), "::");
        assert_eq!(query.to_string(), "store::::book_list::0");

        let query = PathQuery::parse_with("..a", &FindOptions::new(".")).expect("valid separator");
        assert_eq!(query.to_string(), "..a");
    }
}

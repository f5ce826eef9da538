//! Section and entry model produced by the parser.

use serde::Serialize;

use crate::error::{Error, Result};

/// One `key=value` pair inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Key identifier. Not enforced unique within a section.
    pub name: String,
    /// Raw value text, already separated from any inline comment.
    pub value: String,
    /// Preceding comment lines (oldest first), followed by the inline comment.
    pub tooltip: Option<String>,
    /// Zero-based index of the line this entry was parsed from.
    ///
    /// `None` for entries created in memory; those are appended on render.
    pub line_number: Option<usize>,
    /// Text after the first `;` on the entry line.
    pub inline_comment: Option<String>,
}

impl Entry {
    /// Create an entry with no file origin.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            tooltip: None,
            line_number: None,
            inline_comment: None,
        }
    }

    /// Whether this entry came from a line of the loaded file.
    pub fn is_positioned(&self) -> bool {
        self.line_number.is_some()
    }
}

/// A `[name]` group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub tooltip: Option<String>,
    pub line_number: Option<usize>,
    /// Entries in order of appearance.
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tooltip: None,
            line_number: None,
            entries: Vec::new(),
        }
    }

    /// First entry with the given name.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// First entry with the given name, mutably.
    pub fn entry_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }
}

/// Check that `key` parses back as the same key once written as `key=value`.
///
/// # Errors
/// Returns [`Error::InvalidKey`] for empty keys, keys with surrounding
/// whitespace, keys spanning lines, and keys the parser would read as a
/// delimiter, comment or section header.
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "key cannot be empty"
    } else if key.contains(['\r', '\n']) {
        "key must be a single line"
    } else if key.trim() != key {
        "key cannot start or end with whitespace"
    } else if key.contains('=') {
        "key cannot contain '='"
    } else if key.contains(';') {
        "key cannot contain ';' because it starts a comment"
    } else if key.starts_with('[') {
        "key cannot start with '[' because it would read as a section header"
    } else {
        return Ok(());
    };

    Err(Error::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_entry_has_no_origin() {
        let entry = Entry::new("bEnabled", "true");
        assert!(!entry.is_positioned());
        assert!(entry.tooltip.is_none());
        assert!(entry.inline_comment.is_none());
    }

    #[test]
    fn test_entry_lookup_returns_first_duplicate() {
        let mut section = Section::new("General");
        section.entries.push(Entry::new("key", "1"));
        section.entries.push(Entry::new("key", "2"));

        assert_eq!(section.entry("key").unwrap().value, "1");

        section.entry_mut("key").unwrap().value = "9".to_string();
        assert_eq!(section.entries[0].value, "9");
        assert_eq!(section.entries[1].value, "2");
    }

    #[rstest]
    #[case("bEnabled")]
    #[case("sPath.Data")]
    #[case("key with inner space")]
    #[case("x]")]
    fn test_valid_keys(#[case] key: &str) {
        assert!(validate_key(key).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case(" padded")]
    #[case("padded\t")]
    #[case("a=b")]
    #[case(";hidden")]
    #[case("a;b")]
    #[case("[Section]")]
    #[case("[open")]
    #[case("two\nlines")]
    #[case("cr\rkey")]
    fn test_invalid_keys(#[case] key: &str) {
        assert!(matches!(validate_key(key), Err(Error::InvalidKey { .. })));
    }
}

//! Editor modes
//!
//! A mode is the gate every forward edit passes through. `Insert` performs the
//! mutation with out-of-range positions clamped; `ReadOnly` refuses it without
//! touching the content.

use alloc::string::String;
use core::fmt;

use crate::document::{byte_offset, Document};
use crate::error::{EditError, EditOperation, EditResult};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(rename_all = "kebab-case"))]
pub enum EditorMode {
    /// Edits are applied
    #[default]
    Insert,
    /// Edits are rejected
    ReadOnly,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Insert => "INSERT",
            EditorMode::ReadOnly => "READ-ONLY",
        }
    }

    /// Display name for status labels
    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::Insert => "Insert Mode",
            EditorMode::ReadOnly => "Read-Only Mode",
        }
    }

    pub fn allows_edits(&self) -> bool {
        matches!(self, EditorMode::Insert)
    }

    pub fn toggled(&self) -> Self {
        match self {
            EditorMode::Insert => EditorMode::ReadOnly,
            EditorMode::ReadOnly => EditorMode::Insert,
        }
    }

    /// Insert `text` at char `position`, clamped to the end of the content
    pub fn insert_text(&self, doc: &mut Document, text: &str, position: usize) -> EditResult<()> {
        match self {
            EditorMode::Insert => {
                let content = doc.content();
                let at = byte_offset(content, position);

                let mut updated = String::with_capacity(content.len() + text.len());
                updated.push_str(&content[..at]);
                updated.push_str(text);
                updated.push_str(&content[at..]);

                doc.set_content(updated);
                Ok(())
            }
            EditorMode::ReadOnly => Err(EditError::rejected(EditOperation::Insert, *self)),
        }
    }

    /// Remove up to `length` chars starting at char `position`
    ///
    /// A position at or past the end, or a zero length, leaves the document
    /// untouched and does not notify observers.
    pub fn delete_text(&self, doc: &mut Document, length: usize, position: usize) -> EditResult<()> {
        match self {
            EditorMode::Insert => {
                let char_len = doc.char_len();
                if position >= char_len || length == 0 {
                    return Ok(());
                }

                let end = position + length.min(char_len - position);
                let content = doc.content();
                let start_byte = byte_offset(content, position);
                let end_byte = byte_offset(content, end);

                let mut updated = String::with_capacity(content.len() - (end_byte - start_byte));
                updated.push_str(&content[..start_byte]);
                updated.push_str(&content[end_byte..]);

                doc.set_content(updated);
                Ok(())
            }
            EditorMode::ReadOnly => Err(EditError::rejected(EditOperation::Delete, *self)),
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(EditorMode::Insert.as_str(), "INSERT");
        assert_eq!(EditorMode::ReadOnly.as_str(), "READ-ONLY");
        assert_eq!(EditorMode::Insert.name(), "Insert Mode");
        assert_eq!(EditorMode::ReadOnly.name(), "Read-Only Mode");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(EditorMode::default(), EditorMode::Insert);
        assert_eq!(EditorMode::Insert.toggled(), EditorMode::ReadOnly);
        assert_eq!(EditorMode::ReadOnly.toggled(), EditorMode::Insert);
        assert!(EditorMode::Insert.allows_edits());
        assert!(!EditorMode::ReadOnly.allows_edits());
    }

    #[test]
    fn test_insert_clamps_position_to_end() {
        let mut doc = Document::with_content("abc");
        EditorMode::Insert.insert_text(&mut doc, "!", 99).unwrap();
        assert_eq!(doc.content(), "abc!");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut doc = Document::with_content("Hd");
        EditorMode::Insert.insert_text(&mut doc, "ello Worl", 1).unwrap();
        assert_eq!(doc.content(), "Hello World");
    }

    #[test]
    fn test_insert_counts_chars_not_bytes() {
        let mut doc = Document::with_content("héllo");
        EditorMode::Insert.insert_text(&mut doc, "X", 2).unwrap();
        assert_eq!(doc.content(), "héXllo");
    }

    #[test]
    fn test_delete_clamps_length() {
        let mut doc = Document::with_content("Hello World");
        EditorMode::Insert.delete_text(&mut doc, 100, 5).unwrap();
        assert_eq!(doc.content(), "Hello");
    }

    #[test]
    fn test_delete_past_end_is_noop() {
        let mut doc = Document::with_content("abc");
        EditorMode::Insert.delete_text(&mut doc, 5, 10).unwrap();
        EditorMode::Insert.delete_text(&mut doc, 1, 3).unwrap();
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_delete_zero_length_is_noop() {
        let mut doc = Document::with_content("abc");
        EditorMode::Insert.delete_text(&mut doc, 0, 1).unwrap();
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_delete_multibyte() {
        let mut doc = Document::with_content("a→b→c");
        EditorMode::Insert.delete_text(&mut doc, 2, 1).unwrap();
        assert_eq!(doc.content(), "a→c");
    }

    #[test]
    fn test_read_only_rejects_without_mutation() {
        let mut doc = Document::with_content("abc");

        let err = EditorMode::ReadOnly.insert_text(&mut doc, "x", 0).unwrap_err();
        assert_eq!(err, EditError::rejected(EditOperation::Insert, EditorMode::ReadOnly));

        let err = EditorMode::ReadOnly.delete_text(&mut doc, 1, 0).unwrap_err();
        assert_eq!(err, EditError::rejected(EditOperation::Delete, EditorMode::ReadOnly));

        assert_eq!(doc.content(), "abc");
    }
}

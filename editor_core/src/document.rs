//! Editable document: content, active mode and observers

use alloc::string::String;

use crate::mode::EditorMode;
use crate::observer::ObserverRegistry;
use crate::snapshot::ContentSnapshot;

/// Byte offset of char index `position`, clamped to the end of `content`
pub(crate) fn byte_offset(content: &str, position: usize) -> usize {
    content
        .char_indices()
        .nth(position)
        .map(|(offset, _)| offset)
        .unwrap_or(content.len())
}

/// The state every edit command operates on
///
/// Owned by the [`Editor`](crate::Editor) next to its history. Commands
/// borrow it mutably for the duration of one execute or undo.
#[derive(Debug, Default)]
pub struct Document {
    content: String,
    mode: EditorMode,
    observers: ObserverRegistry,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in chars
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Replace the content and notify every observer, even if nothing changed
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.observers.notify_all(&self.content);
    }

    pub fn save(&self) -> ContentSnapshot {
        ContentSnapshot::capture(&self.content)
    }

    /// Put back a snapshot's content, bypassing the mode
    pub fn restore(&mut self, snapshot: ContentSnapshot) {
        self.set_content(snapshot.into_content());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("abc", 0), 0);
        assert_eq!(byte_offset("abc", 2), 2);
        assert_eq!(byte_offset("abc", 3), 3);
        assert_eq!(byte_offset("abc", 50), 3);
        assert_eq!(byte_offset("é!", 1), 2);
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.content(), "");
        assert_eq!(doc.char_len(), 0);
        assert_eq!(doc.mode(), EditorMode::Insert);
        assert!(doc.observers().is_empty());
    }

    #[test]
    fn test_save_restore() {
        let mut doc = Document::with_content("before");
        let snapshot = doc.save();
        doc.set_content("after".into());
        assert_eq!(doc.content(), "after");

        doc.restore(snapshot);
        assert_eq!(doc.content(), "before");
    }

    #[test]
    fn test_mode_switch_keeps_content() {
        let mut doc = Document::with_content("text");
        doc.set_mode(EditorMode::ReadOnly);
        assert_eq!(doc.mode(), EditorMode::ReadOnly);
        assert_eq!(doc.content(), "text");
    }
}

//! Reversible edit commands

use alloc::string::String;

use crate::document::Document;
use crate::error::{EditOperation, EditResult};
use crate::snapshot::ContentSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EditKind {
    Insert { text: String, position: usize },
    Delete { length: usize, position: usize },
}

/// One logical edit
///
/// `execute` snapshots the content, then asks the document's active mode to
/// perform the edit. The snapshot is only kept when the mode accepted it.
/// `undo` writes the snapshot back directly, so it works in any mode.
///
/// The snapshot is private: only a successful `execute` can arm `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    kind: EditKind,
    snapshot: Option<ContentSnapshot>,
}

impl EditCommand {
    /// Insert text at a char position
    pub fn insert(text: impl Into<String>, position: usize) -> Self {
        Self {
            kind: EditKind::Insert {
                text: text.into(),
                position,
            },
            snapshot: None,
        }
    }

    /// Remove a run of chars starting at a char position
    pub fn delete(length: usize, position: usize) -> Self {
        Self {
            kind: EditKind::Delete { length, position },
            snapshot: None,
        }
    }

    pub fn operation(&self) -> EditOperation {
        match self.kind {
            EditKind::Insert { .. } => EditOperation::Insert,
            EditKind::Delete { .. } => EditOperation::Delete,
        }
    }

    pub fn position(&self) -> usize {
        match self.kind {
            EditKind::Insert { position, .. } | EditKind::Delete { position, .. } => position,
        }
    }

    /// True between a successful execute and the matching undo
    pub fn is_executed(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn execute(&mut self, doc: &mut Document) -> EditResult<()> {
        let before = doc.save();
        let mode = doc.mode();

        match &self.kind {
            EditKind::Insert { text, position } => mode.insert_text(doc, text, *position)?,
            EditKind::Delete { length, position } => mode.delete_text(doc, *length, *position)?,
        }

        self.snapshot = Some(before);
        Ok(())
    }

    /// Restore the content captured by the last execute
    ///
    /// Returns false, leaving the document untouched, if the command has not
    /// been executed.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.snapshot.take() {
            Some(snapshot) => {
                doc.restore(snapshot);
                true
            }
            None => false,
        }
    }
}

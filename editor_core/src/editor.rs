//! Editor engine
//!
//! Composes the document, its mode and observers, and the undo/redo history
//! behind the public edit API used by presentation layers.

use alloc::rc::Rc;
use alloc::string::String;

use log::debug;

use crate::{
    command::EditCommand,
    document::Document,
    error::EditResult,
    history::History,
    mode::EditorMode,
    observer::{ContentObserver, RegistryHandle},
    snapshot::{ContentSnapshot, EditorSnapshot},
};

/// Single-user text editor with bounded, reversible history
///
/// Not internally synchronized: a multi-threaded host must serialize all
/// calls to one instance.
#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    history: History,
}

impl Editor {
    /// Create a new empty editor in insert mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor holding `content` with empty history
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            document: Document::with_content(content),
            history: History::new(),
        }
    }

    pub fn with_mode(mut self, mode: EditorMode) -> Self {
        self.document.set_mode(mode);
        self
    }

    /// Insert `text` at char `position`
    ///
    /// Fails with [`EditError::Rejected`](crate::EditError::Rejected) in
    /// read-only mode, leaving content and history untouched.
    pub fn insert(&mut self, text: &str, position: usize) -> EditResult<()> {
        self.history
            .execute(EditCommand::insert(text, position), &mut self.document)
    }

    /// Delete up to `length` chars starting at char `position`
    pub fn delete(&mut self, length: usize, position: usize) -> EditResult<()> {
        self.history
            .execute(EditCommand::delete(length, position), &mut self.document)
    }

    /// Returns false if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.document)
    }

    /// Returns Ok(false) if there was nothing to redo
    ///
    /// Fails if the current mode rejects the replayed edit; that edit is
    /// then no longer redoable.
    pub fn redo(&mut self) -> EditResult<bool> {
        self.history.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn content(&self) -> &str {
        self.document.content()
    }

    /// Replace the content outright and notify observers
    ///
    /// Bypasses both the mode and the history.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.document.set_content(content.into());
    }

    pub fn mode(&self) -> EditorMode {
        self.document.mode()
    }

    /// Switch mode for subsequent edits; history and content are kept
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode != self.document.mode() {
            debug!("mode {} -> {}", self.document.mode().as_str(), mode.as_str());
        }
        self.document.set_mode(mode);
    }

    /// Flip between insert and read-only, returning the new mode
    pub fn toggle_mode(&mut self) -> EditorMode {
        let mode = self.mode().toggled();
        self.set_mode(mode);
        mode
    }

    pub fn save(&self) -> ContentSnapshot {
        self.document.save()
    }

    pub fn restore(&mut self, snapshot: &ContentSnapshot) {
        self.document.restore(snapshot.clone());
    }

    /// Returns false if the observer was already attached
    pub fn attach(&self, observer: Rc<dyn ContentObserver>) -> bool {
        self.document.observers().attach(observer)
    }

    pub fn detach<T: ContentObserver + ?Sized>(&self, observer: &Rc<T>) -> bool {
        self.document.observers().detach(observer)
    }

    pub fn notify_all(&self) {
        self.document.observers().notify_all(self.document.content());
    }

    pub fn observer_count(&self) -> usize {
        self.document.observers().len()
    }

    pub fn observer_handle(&self) -> RegistryHandle {
        self.document.observers().handle()
    }

    /// Get a complete snapshot of editor state (for parity testing)
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            mode: self.mode(),
            content: self.content().into(),
            undo_depth: self.undo_depth(),
            redo_depth: self.redo_depth(),
        }
    }
}

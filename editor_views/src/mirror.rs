//! Display mirror
//!
//! Holds a copy of the last content the editor announced. A presentation
//! layer refreshes its widget from here, and diffs user keystrokes against it.

use std::cell::{Cell, RefCell};

use editor_core::ContentObserver;

#[derive(Debug, Default)]
pub struct ContentMirror {
    content: RefCell<String>,
    updates: Cell<usize>,
}

impl ContentMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from content already displayed, without counting an update
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(content.into()),
            updates: Cell::new(0),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Number of notifications received
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl ContentObserver for ContentMirror {
    fn on_content_changed(&self, content: &str) {
        let mut mirrored = self.content.borrow_mut();
        mirrored.clear();
        mirrored.push_str(content);
        self.updates.set(self.updates.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core::Editor;
    use std::rc::Rc;

    #[test]
    fn test_mirror_tracks_content() {
        let mut editor = Editor::new();
        let mirror = Rc::new(ContentMirror::new());
        editor.attach(mirror.clone());

        editor.insert("abc", 0).unwrap();
        editor.delete(1, 1).unwrap();
        assert_eq!(mirror.content(), "ac");
        assert_eq!(mirror.updates(), 2);
    }

    #[test]
    fn test_noop_delete_is_not_mirrored() {
        let mut editor = Editor::with_content("abc");
        let mirror = Rc::new(ContentMirror::with_content("abc"));
        editor.attach(mirror.clone());

        editor.delete(5, 10).unwrap();
        assert_eq!(mirror.updates(), 0);
        assert_eq!(mirror.content(), "abc");
    }

    #[test]
    fn test_undo_after_noop_delete_notifies() {
        let mut editor = Editor::with_content("abc");
        let mirror = Rc::new(ContentMirror::with_content("abc"));
        editor.attach(mirror.clone());

        editor.delete(5, 10).unwrap();
        assert!(editor.undo());
        assert_eq!(mirror.updates(), 1);
        assert_eq!(mirror.content(), "abc");
    }
}

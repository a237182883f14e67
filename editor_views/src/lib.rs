//! # Editor Views
//!
//! Derived views that follow editor content through
//! [`ContentObserver`](editor_core::ContentObserver) notifications.
//!
//! ## Philosophy
//!
//! - **Passive**: Views only react to content changes, they never edit
//! - **Shared**: Views are attached as `Rc` and keep their state in cells
//! - **Host-agnostic**: Views expose labels and counts, hosts decide rendering
//!
//! ## Example
//!
//! ```ignore
//! use editor_core::Editor;
//! use editor_views::WordCountView;
//! use std::rc::Rc;
//!
//! let mut editor = Editor::new();
//! let words = Rc::new(WordCountView::new());
//! editor.attach(words.clone());
//!
//! editor.insert("Hello World", 0)?;
//! assert_eq!(words.label(), "Word Count: 2");
//! ```

pub mod counts;
pub mod mirror;

pub use counts::{CharacterCountView, WordCountView};
pub use mirror::ContentMirror;

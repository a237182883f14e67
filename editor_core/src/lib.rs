#![no_std]

//! # Editor Core
//!
//! Single-user, in-memory text editing engine with reversible edits.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same edit sequence => same editor state
//! - **Reversible**: Every accepted edit carries the snapshot needed to undo it
//! - **Mechanism over policy**: The active mode decides whether an edit is allowed
//! - **Passive observers**: Views are told about content changes, they never drive them
//!
//! ## Design
//!
//! The core provides:
//! - Editor: Public edit API composing everything below
//! - EditCommand: Insert/Delete edits that snapshot content before mutating
//! - History: Done/undone stacks sequencing execute, undo and redo
//! - EditorMode: Insert or ReadOnly gate consulted on every forward edit
//! - ObserverRegistry: Ordered, identity-unique content-change listeners
//! - EditorSnapshot: Deterministic state record for replay comparisons
//!
//! Undo restores content straight from the stored snapshot and never asks the
//! mode. Redo re-executes the command, so it is checked against whatever mode
//! is active at that moment.

extern crate alloc;

pub mod command;
pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod mode;
pub mod observer;
pub mod snapshot;

pub use command::EditCommand;
pub use document::Document;
pub use editor::Editor;
pub use error::{EditError, EditOperation, EditResult};
pub use history::History;
pub use mode::EditorMode;
pub use observer::{ContentObserver, ObserverRegistry, RegistryHandle};
pub use snapshot::{ContentSnapshot, EditorSnapshot};

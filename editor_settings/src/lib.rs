//! # Editor Settings
//!
//! Typed startup settings for an editor session.
//!
//! ## Philosophy
//!
//! - **Typed settings**: Modes and flags are real types, not strings
//! - **Defaults first**: A missing or unreadable settings file means defaults
//! - **Versioned**: The persisted format carries a version for migrations
//! - **Deterministic**: Serialization is stable, so files diff cleanly
//!
//! ## Example
//!
//! ```ignore
//! use editor_settings::{deserialize_settings, EditorSettings};
//!
//! let settings = deserialize_settings(br#"{ "version": 1, "initial_mode": "read-only" }"#)?;
//! let editor = settings.build_editor();
//! ```

pub mod persistence;

use editor_core::{Editor, EditorMode};
use serde::{Deserialize, Serialize};

pub use persistence::{
    deserialize_settings, load_settings_file, load_settings_safe, save_settings_file,
    serialize_settings, SettingsError, SettingsResult,
};

/// Which derived views a host should attach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub word_count: bool,
    pub character_count: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            word_count: true,
            character_count: true,
        }
    }
}

/// Editor session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    /// Mode the editor starts in
    pub initial_mode: EditorMode,
    /// Content loaded before the first edit; not undoable
    pub initial_content: String,
    pub views: ViewSettings,
}

impl EditorSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            initial_mode: EditorMode::Insert,
            initial_content: String::new(),
            views: ViewSettings::default(),
        }
    }

    pub fn with_initial_mode(mut self, mode: EditorMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_initial_content(mut self, content: impl Into<String>) -> Self {
        self.initial_content = content.into();
        self
    }

    /// Editor holding the initial content and mode, with empty history
    pub fn build_editor(&self) -> Editor {
        Editor::with_content(self.initial_content.clone()).with_mode(self.initial_mode)
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::new()
    }
}

//! Settings persistence layer
//!
//! Loads and saves [`EditorSettings`] as JSON. Unknown versions are refused
//! rather than guessed at.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::EditorSettings;

/// Result type for persistence operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to deserialize settings: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes settings to pretty JSON bytes
pub fn serialize_settings(settings: &EditorSettings) -> SettingsResult<Vec<u8>> {
    serde_json::to_vec_pretty(settings).map_err(SettingsError::Serialization)
}

/// Deserializes settings from JSON bytes
///
/// Missing fields take their defaults; the version must match.
pub fn deserialize_settings(bytes: &[u8]) -> SettingsResult<EditorSettings> {
    let settings: EditorSettings =
        serde_json::from_slice(bytes).map_err(SettingsError::Deserialization)?;

    if settings.version != EditorSettings::CURRENT_VERSION {
        return Err(SettingsError::UnsupportedVersion(settings.version));
    }

    Ok(settings)
}

/// Attempts to load settings from bytes, falling back to defaults on error
pub fn load_settings_safe(bytes: &[u8]) -> EditorSettings {
    deserialize_settings(bytes).unwrap_or_else(|err| {
        warn!("using default settings: {}", err);
        EditorSettings::new()
    })
}

pub fn load_settings_file(path: impl AsRef<Path>) -> SettingsResult<EditorSettings> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("loaded settings from {}", path.display());
    deserialize_settings(&bytes)
}

pub fn save_settings_file(path: impl AsRef<Path>, settings: &EditorSettings) -> SettingsResult<()> {
    let bytes = serialize_settings(settings)?;
    fs::write(path, bytes)?;
    Ok(())
}

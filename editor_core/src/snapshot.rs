//! Content snapshots for undo and editor state records for parity testing

use crate::EditorMode;
use alloc::string::String;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Immutable copy of the editor content at one point in time
///
/// Owned by the command that captured it and consumed when that command is
/// undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
    content: String,
}

impl ContentSnapshot {
    pub fn capture(content: &str) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

/// Complete editor state record for deterministic replay comparisons
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub content: String,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl EditorSnapshot {
    pub fn can_undo(&self) -> bool {
        self.undo_depth > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_depth > 0
    }

    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.mode as u8]);
        hasher.update(self.content.as_bytes());
        hasher.update(self.undo_depth.to_le_bytes());
        hasher.update(self.redo_depth.to_le_bytes());

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_copies_content() {
        let mut source = String::from("hello");
        let snapshot = ContentSnapshot::capture(&source);
        source.push_str(" world");

        assert_eq!(snapshot.content(), "hello");
        assert_eq!(snapshot.into_content(), "hello");
    }

    #[test]
    fn test_snapshot_hash_deterministic() {
        let snapshot = EditorSnapshot {
            mode: EditorMode::Insert,
            content: "hello".into(),
            undo_depth: 1,
            redo_depth: 0,
        };

        assert_eq!(snapshot.hash(), snapshot.hash(), "Hash should be deterministic");
    }

    #[test]
    fn test_snapshot_hash_different_for_different_state() {
        let snapshot1 = EditorSnapshot {
            mode: EditorMode::Insert,
            content: "hello".into(),
            undo_depth: 1,
            redo_depth: 0,
        };

        let snapshot2 = EditorSnapshot {
            mode: EditorMode::ReadOnly,
            ..snapshot1.clone()
        };

        assert_ne!(
            snapshot1.hash(),
            snapshot2.hash(),
            "Different states should have different hashes"
        );
    }

    #[test]
    fn test_editor_snapshot_depth_queries() {
        let snapshot = EditorSnapshot {
            mode: EditorMode::Insert,
            content: "abc".into(),
            undo_depth: 2,
            redo_depth: 0,
        };
        assert!(snapshot.can_undo());
        assert!(!snapshot.can_redo());
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_editor_snapshot_serde_round_trip() {
        let snapshot = EditorSnapshot {
            mode: EditorMode::ReadOnly,
            content: "Hello \"World\"".into(),
            undo_depth: 3,
            redo_depth: 1,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"mode\":\"read-only\""));

        let restored: EditorSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.hash(), snapshot.hash());
    }
}

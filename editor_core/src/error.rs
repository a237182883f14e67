//! Edit failure types

use core::fmt;
use thiserror::Error;

use crate::mode::EditorMode;

/// Result alias for edit operations
pub type EditResult<T> = Result<T, EditError>;

/// Kind of forward edit a mode was asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    Insert,
    Delete,
}

impl EditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditOperation::Insert => "insert",
            EditOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable edit failure
///
/// Content and history are left exactly as they were before the failed call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("Cannot {operation} text in {mode}")]
    Rejected {
        operation: EditOperation,
        mode: EditorMode,
    },
}

impl EditError {
    pub fn rejected(operation: EditOperation, mode: EditorMode) -> Self {
        EditError::Rejected { operation, mode }
    }

    /// Operation the mode refused
    pub fn operation(&self) -> EditOperation {
        match self {
            EditError::Rejected { operation, .. } => *operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_rejected_messages() {
        let insert = EditError::rejected(EditOperation::Insert, EditorMode::ReadOnly);
        assert_eq!(insert.to_string(), "Cannot insert text in Read-Only Mode");

        let delete = EditError::rejected(EditOperation::Delete, EditorMode::ReadOnly);
        assert_eq!(delete.to_string(), "Cannot delete text in Read-Only Mode");
        assert_eq!(delete.operation(), EditOperation::Delete);
    }
}

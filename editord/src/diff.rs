//! Keystroke diffing
//!
//! A text widget reports whole-text changes; the editor wants explicit
//! inserts and deletes. The change position is the first char where the
//! shorter text differs from the longer one, and the length difference says
//! how much was typed or removed there.

use editor_core::{EditResult, Editor};

/// Edit inferred from two successive texts of a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredEdit {
    Insert { text: String, position: usize },
    Delete { length: usize, position: usize },
}

impl InferredEdit {
    pub fn apply(&self, editor: &mut Editor) -> EditResult<()> {
        match self {
            InferredEdit::Insert { text, position } => editor.insert(text, *position),
            InferredEdit::Delete { length, position } => editor.delete(*length, *position),
        }
    }
}

fn first_difference(shorter: &[char], longer: &[char]) -> usize {
    shorter
        .iter()
        .zip(longer)
        .position(|(a, b)| a != b)
        .unwrap_or(shorter.len())
}

/// Infer the edit that turned `previous` into `current`
///
/// Returns None when both texts have the same length, including replacements
/// that keep the length.
pub fn infer_edit(previous: &str, current: &str) -> Option<InferredEdit> {
    let previous: Vec<char> = previous.chars().collect();
    let current: Vec<char> = current.chars().collect();

    if current.len() > previous.len() {
        let position = first_difference(&previous, &current);
        let added = current.len() - previous.len();
        let text = current[position..position + added].iter().collect();
        Some(InferredEdit::Insert { text, position })
    } else if current.len() < previous.len() {
        let position = first_difference(&current, &previous);
        let length = previous.len() - current.len();
        Some(InferredEdit::Delete { length, position })
    } else {
        None
    }
}

//! Word and character count views

use std::cell::Cell;

use editor_core::ContentObserver;
use log::trace;

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Number of words in `content`
///
/// Control chars and spaces are trimmed from both ends, then the rest is split
/// on runs of ASCII whitespace. Non-ASCII spaces such as U+00A0 join words.
pub fn count_words(content: &str) -> usize {
    content
        .trim_matches(|c: char| c <= ' ')
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

/// Number of chars in `content`
pub fn count_chars(content: &str) -> usize {
    content.chars().count()
}

/// Tracks the word count of the editor content
#[derive(Debug, Default)]
pub struct WordCountView {
    words: Cell<usize>,
}

impl WordCountView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.words.get()
    }

    pub fn label(&self) -> String {
        format!("Word Count: {}", self.count())
    }
}

impl ContentObserver for WordCountView {
    fn on_content_changed(&self, content: &str) {
        let words = count_words(content);
        trace!("word count {}", words);
        self.words.set(words);
    }
}

/// Tracks the character count of the editor content
#[derive(Debug, Default)]
pub struct CharacterCountView {
    chars: Cell<usize>,
}

impl CharacterCountView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.chars.get()
    }

    pub fn label(&self) -> String {
        format!("Character Count: {}", self.count())
    }
}

impl ContentObserver for CharacterCountView {
    fn on_content_changed(&self, content: &str) {
        let chars = count_chars(content);
        trace!("character count {}", chars);
        self.chars.set(chars);
    }
}

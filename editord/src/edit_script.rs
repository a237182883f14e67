//! # Edit Script Parser
//!
//! Provides a simple scripted edit format for deterministic testing and demos.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one action:
//! - `insert <position> "<text>"`: insert text at a char position
//! - `delete <length> <position>`: delete chars starting at a position
//! - `undo`, `redo`
//! - `mode insert`, `mode read-only`, `mode toggle`
//! - `type "<text>"`: the widget now shows this text; the edit is inferred
//! - `expect "<text>"`: the editor content must equal this text
//! - Comments: `# This is a comment`
//!
//! Quoted text understands `\n`, `\t`, `\"` and `\\`.
//!
//! ## Example
//!
//! ```text
//! # Build a greeting, then take it back
//! insert 0 "Hello"
//! insert 5 " World"
//! undo
//! expect "Hello"
//! ```

use std::collections::VecDeque;

use editor_core::EditorMode;
use thiserror::Error;

/// Edit script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditScriptError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// Requested mode switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    Set(EditorMode),
    Toggle,
}

/// A single scripted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptAction {
    Insert { text: String, position: usize },
    Delete { length: usize, position: usize },
    Undo,
    Redo,
    Mode(ModeChange),
    Type(String),
    Expect(String),
}

/// Parsed edit script
///
/// Each action keeps the 1-based line it came from, for error reporting.
#[derive(Debug, Clone, Default)]
pub struct EditScript {
    actions: VecDeque<(usize, ScriptAction)>,
}

impl EditScript {
    /// Creates a new empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, EditScriptError> {
        let mut actions = VecDeque::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_num = index + 1;
            let action = Self::parse_line(line).map_err(|message| EditScriptError::ParseError {
                line: line_num,
                message,
            })?;
            actions.push_back((line_num, action));
        }

        if actions.is_empty() {
            return Err(EditScriptError::EmptyScript);
        }

        Ok(Self { actions })
    }

    /// Appends an action, numbered after the last one
    pub fn push(&mut self, action: ScriptAction) {
        let line = self.actions.back().map(|(line, _)| line + 1).unwrap_or(1);
        self.actions.push_back((line, action));
    }

    /// Takes the next action and its line number
    pub fn next_action(&mut self) -> Option<(usize, ScriptAction)> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn parse_line(line: &str) -> Result<ScriptAction, String> {
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "insert" => {
                let (position, rest) = split_word(rest, "position")?;
                Ok(ScriptAction::Insert {
                    position: parse_number(position, "position")?,
                    text: parse_quoted(rest)?,
                })
            }
            "delete" => {
                let (length, rest) = split_word(rest, "length")?;
                let (position, rest) = split_word(rest, "position")?;
                expect_end(rest)?;
                Ok(ScriptAction::Delete {
                    length: parse_number(length, "length")?,
                    position: parse_number(position, "position")?,
                })
            }
            "undo" => expect_end(rest).map(|_| ScriptAction::Undo),
            "redo" => expect_end(rest).map(|_| ScriptAction::Redo),
            "mode" => Ok(ScriptAction::Mode(parse_mode(rest)?)),
            "type" => Ok(ScriptAction::Type(parse_quoted(rest)?)),
            "expect" => Ok(ScriptAction::Expect(parse_quoted(rest)?)),
            other => Err(format!("Unknown action: {}", other)),
        }
    }
}

fn split_word<'a>(input: &'a str, what: &str) -> Result<(&'a str, &'a str), String> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(format!("Missing {}", what));
    }
    Ok(match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    })
}

fn expect_end(rest: &str) -> Result<(), String> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(format!("Unexpected trailing input: {}", rest.trim()))
    }
}

fn parse_number(word: &str, what: &str) -> Result<usize, String> {
    word.parse()
        .map_err(|_| format!("Invalid {}: {}", what, word))
}

fn parse_mode(rest: &str) -> Result<ModeChange, String> {
    match rest.to_lowercase().as_str() {
        "insert" => Ok(ModeChange::Set(EditorMode::Insert)),
        "read-only" | "readonly" => Ok(ModeChange::Set(EditorMode::ReadOnly)),
        "toggle" => Ok(ModeChange::Toggle),
        "" => Err("Missing mode".to_string()),
        other => Err(format!("Invalid mode: {}", other)),
    }
}

fn parse_quoted(input: &str) -> Result<String, String> {
    let input = input.trim();
    let inner = input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| format!("Expected quoted text, found: {}", input))?;

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            return Err("Unescaped quote inside quoted text".to_string());
        }
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('"') => text.push('"'),
            Some('\\') => text.push('\\'),
            Some(other) => return Err(format!("Unknown escape: \\{}", other)),
            None => return Err("Dangling escape at end of text".to_string()),
        }
    }
    Ok(text)
}

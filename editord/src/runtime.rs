//! # Host Runtime
//!
//! The loop that feeds script actions to the editor and keeps the attached
//! views current.

use std::fmt;
use std::rc::Rc;

use editor_core::{EditError, Editor, EditorSnapshot};
use editor_settings::{EditorSettings, SettingsError};
use editor_views::{CharacterCountView, ContentMirror, WordCountView};
use log::{debug, info, warn};
use thiserror::Error;

use crate::diff::infer_edit;
use crate::edit_script::{EditScript, EditScriptError, ModeChange, ScriptAction};

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    Script(#[from] EditScriptError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Expectation failed at line {line}: expected {expected:?}, found {found:?}")]
    ExpectationFailed {
        line: usize,
        expected: String,
        found: String,
    },
}

/// Host runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HostRuntimeConfig {
    /// Editor settings
    pub settings: EditorSettings,
    /// Optional edit script
    pub script: Option<String>,
    /// Maximum steps to run (0 = unlimited)
    pub max_steps: usize,
}

/// What one scripted action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The action ran (an edit, undo, redo, mode switch or passing check)
    Applied,
    /// Nothing to do: empty undo/redo, or a `type` with no inferable edit
    Unchanged,
    /// The mode refused the edit; editor state is as before
    Rejected(EditError),
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Editor state when the run stopped
    pub state: EditorSnapshot,
    pub steps: usize,
    /// Messages of rejected edits, in order
    pub rejected_edits: Vec<String>,
    pub word_count: Option<usize>,
    pub character_count: Option<usize>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.state.content)?;
        writeln!(f, "---")?;
        writeln!(f, "State: {}", self.state.mode)?;
        if let Some(words) = self.word_count {
            writeln!(f, "Word Count: {}", words)?;
        }
        if let Some(chars) = self.character_count {
            writeln!(f, "Character Count: {}", chars)?;
        }
        writeln!(
            f,
            "Undo: {}  Redo: {}",
            self.state.can_undo(),
            self.state.can_redo()
        )?;
        write!(
            f,
            "Steps: {}  Rejected: {}",
            self.steps,
            self.rejected_edits.len()
        )
    }
}

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    editor: Editor,
    /// What the display currently shows
    display: Rc<ContentMirror>,
    words: Option<Rc<WordCountView>>,
    chars: Option<Rc<CharacterCountView>>,
    /// Edit script (if any)
    script: Option<EditScript>,
    /// Step counter
    steps: usize,
    rejected_edits: Vec<String>,
}

impl HostRuntime {
    /// Creates a new host runtime
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let script = config
            .script
            .as_deref()
            .map(EditScript::from_text)
            .transpose()?;

        let editor = config.settings.build_editor();
        let display = Rc::new(ContentMirror::with_content(editor.content()));
        editor.attach(display.clone());

        let words = config.settings.views.word_count.then(|| {
            let view = Rc::new(WordCountView::new());
            editor.attach(view.clone());
            view
        });
        let chars = config.settings.views.character_count.then(|| {
            let view = Rc::new(CharacterCountView::new());
            editor.attach(view.clone());
            view
        });
        // Views start from the initial content, not from zero
        editor.notify_all();

        Ok(Self {
            config,
            editor,
            display,
            words,
            chars,
            script,
            steps: 0,
            rejected_edits: Vec::new(),
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Runs the script to completion, or until `max_steps`
    pub fn run(&mut self) -> Result<RunReport, HostRuntimeError> {
        info!(
            "starting run in {} with {} scripted action(s)",
            self.editor.mode(),
            self.script.as_ref().map_or(0, EditScript::len)
        );

        while self.config.max_steps == 0 || self.steps < self.config.max_steps {
            let Some((line, action)) = self.script.as_mut().and_then(EditScript::next_action)
            else {
                break;
            };
            self.step(line, action)?;
        }

        let report = self.report();
        info!(
            "run finished after {} step(s), {} rejected",
            report.steps,
            report.rejected_edits.len()
        );
        Ok(report)
    }

    /// Applies one action
    ///
    /// Rejected edits are recorded and returned as an outcome, not an error.
    pub fn step(
        &mut self,
        line: usize,
        action: ScriptAction,
    ) -> Result<StepOutcome, HostRuntimeError> {
        self.steps += 1;
        debug!("line {}: {:?}", line, action);

        let result = match action {
            ScriptAction::Insert { text, position } => {
                self.editor.insert(&text, position).map(|_| true)
            }
            ScriptAction::Delete { length, position } => {
                self.editor.delete(length, position).map(|_| true)
            }
            ScriptAction::Undo => Ok(self.editor.undo()),
            ScriptAction::Redo => self.editor.redo(),
            ScriptAction::Mode(ModeChange::Set(mode)) => {
                self.editor.set_mode(mode);
                Ok(true)
            }
            ScriptAction::Mode(ModeChange::Toggle) => {
                self.editor.toggle_mode();
                Ok(true)
            }
            ScriptAction::Type(text) => match infer_edit(&self.display.content(), &text) {
                Some(edit) => edit.apply(&mut self.editor).map(|_| true),
                None => Ok(false),
            },
            ScriptAction::Expect(expected) => {
                if self.editor.content() != expected {
                    return Err(HostRuntimeError::ExpectationFailed {
                        line,
                        expected,
                        found: self.editor.content().to_string(),
                    });
                }
                Ok(true)
            }
        };

        Ok(match result {
            Ok(true) => StepOutcome::Applied,
            Ok(false) => StepOutcome::Unchanged,
            Err(err) => {
                warn!("line {}: {}", line, err);
                self.rejected_edits.push(format!("line {}: {}", line, err));
                StepOutcome::Rejected(err)
            }
        })
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            state: self.editor.snapshot(),
            steps: self.steps,
            rejected_edits: self.rejected_edits.clone(),
            word_count: self.words.as_ref().map(|view| view.count()),
            character_count: self.chars.as_ref().map(|view| view.count()),
        }
    }
}

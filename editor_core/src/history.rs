//! Undo/redo history
//!
//! Two stacks of commands. A command lives on at most one of them: `done`
//! holds what can be undone, `undone` what can be redone. Any new command
//! clears `undone`; history never branches.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::command::EditCommand;
use crate::document::Document;
use crate::error::EditResult;

#[derive(Debug, Default)]
pub struct History {
    done: Vec<EditCommand>,
    undone: Vec<EditCommand>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a new command and record it
    ///
    /// On failure nothing is recorded and the redo stack is kept.
    pub fn execute(&mut self, mut command: EditCommand, doc: &mut Document) -> EditResult<()> {
        command.execute(doc)?;
        debug!(
            "executed {} at {} (undo depth {})",
            command.operation(),
            command.position(),
            self.done.len() + 1
        );
        self.done.push(command);
        self.undone.clear();
        Ok(())
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(mut command) = self.done.pop() else {
            return false;
        };
        command.undo(doc);
        debug!("undid {} at {}", command.operation(), command.position());
        self.undone.push(command);
        true
    }

    /// Returns Ok(false) when there is nothing to redo
    ///
    /// Redo re-executes against the current mode. If that mode rejects the
    /// edit the command is dropped: it ends up on neither stack and the error
    /// is returned. The rest of the redo stack is kept.
    pub fn redo(&mut self, doc: &mut Document) -> EditResult<bool> {
        let Some(mut command) = self.undone.pop() else {
            return Ok(false);
        };
        if let Err(err) = command.execute(doc) {
            warn!("dropping redo of {}: {}", command.operation(), err);
            return Err(err);
        }
        debug!("redid {} at {}", command.operation(), command.position());
        self.done.push(command);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.done.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.undone.len()
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}

//! Undo/redo for designer state.

use super::DesignerState;
use crate::commands::DesignerCommand;
use zhizhu3d_core::constants::MAX_UNDO_DEPTH;

impl DesignerState {
    /// Applies a command and records it for undo. Clears the redo stack.
    pub(crate) fn push_command(&mut self, mut cmd: DesignerCommand) {
        cmd.apply(&mut self.canvas);
        tracing::debug!("Command: {}", cmd.name());
        self.undo_stack.push(cmd);
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        self.is_modified = true;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undoes the most recent command. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(mut cmd) = self.undo_stack.pop() else {
            return false;
        };
        cmd.undo(&mut self.canvas);
        self.redo_stack.push(cmd);
        self.is_modified = true;
        true
    }

    /// Redoes the most recently undone command. Returns false when there is none.
    pub fn redo(&mut self) -> bool {
        let Some(mut cmd) = self.redo_stack.pop() else {
            return false;
        };
        cmd.apply(&mut self.canvas);
        self.undo_stack.push(cmd);
        self.is_modified = true;
        true
    }

    /// Name of the command `undo` would revert.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.name())
    }

    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.name())
    }

    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

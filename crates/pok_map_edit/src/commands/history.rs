//! Undo/redo stacks

use crate::commands::{Delta, Reversible};
use crate::{EditorSettings, Project};

/// Undo and redo stacks.
///
/// Deltas arrive already applied: the edit operations mutate the grid as the
/// user works, and the finished record is committed here.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Delta>,
    redo_stack: Vec<Delta>,
    /// Oldest entries are dropped past this many undo steps
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            limit: settings.history_limit,
            ..Self::default()
        }
    }

    /// Record a finished edit. Clears the redo stack.
    pub fn commit(&mut self, delta: impl Into<Delta>) {
        self.undo_stack.push(delta.into());
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Undo the last edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self, project: &mut Project) -> bool {
        let Some(delta) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("Undoing: {}", delta.name());
        delta.undo(project);
        self.redo_stack.push(delta);
        project.mark_dirty();
        true
    }

    /// Redo the last undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self, project: &mut Project) -> bool {
        let Some(delta) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("Redoing: {}", delta.name());
        delta.redo(project);
        self.undo_stack.push(delta);
        project.mark_dirty();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Name of the edit [`undo`](Self::undo) would revert
    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(Delta::name)
    }

    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(Delta::name)
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Editing session: owns an originator and its snapshot history.
///
/// The session plays the caretaker role. It saves a snapshot after every
/// edit that changed something and restores the originator on undo/redo.
use crate::history::{HistoryConfig, HistoryError, HistoryManager};
use crate::originator::Originator;

/// Couples an originator with its undo/redo history.
pub struct EditSession<O: Originator> {
    originator: O,
    history: HistoryManager<O::Snapshot>,
}

impl<O> std::fmt::Debug for EditSession<O>
where
    O: Originator + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("originator", &self.originator)
            .field("history_len", &self.history.len())
            .field("position", &self.history.position())
            .finish()
    }
}

impl<O: Originator> EditSession<O> {
    /// Starts a session, recording the originator's current state as the baseline.
    pub fn new(originator: O, config: HistoryConfig) -> Self {
        let mut history = HistoryManager::new(config);
        history.save(originator.create_snapshot());
        Self {
            originator,
            history,
        }
    }

    /// Returns the originator (read-only).
    pub fn originator(&self) -> &O {
        &self.originator
    }

    /// Returns the originator for changes that should not be recorded,
    /// such as cursor movement.
    pub fn originator_mut(&mut self) -> &mut O {
        &mut self.originator
    }

    /// Returns the history (read-only).
    pub fn history(&self) -> &HistoryManager<O::Snapshot> {
        &self.history
    }

    /// Applies an edit and records a snapshot if `f` reports a change.
    ///
    /// Returns what `f` returned.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut O) -> bool,
    {
        let changed = f(&mut self.originator);
        if changed {
            self.checkpoint();
        }
        changed
    }

    /// Records the originator's current state unconditionally.
    pub fn checkpoint(&mut self) {
        self.history.save(self.originator.create_snapshot());
    }

    /// Restores the originator to the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] at the oldest snapshot; the
    /// originator is left as it is.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let snapshot = self.history.undo()?;
        self.originator.restore(snapshot);
        Ok(())
    }

    /// Restores the originator to the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] at the newest snapshot; the
    /// originator is left as it is.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let snapshot = self.history.redo()?;
        self.originator.restore(snapshot);
        Ok(())
    }

    /// Forgets all history and makes the current state the new baseline.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.checkpoint();
        tracing::debug!("History cleared");
    }

    /// Ends the session, handing back the originator.
    pub fn into_originator(self) -> O {
        self.originator
    }
}

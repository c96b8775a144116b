/// Snapshot history with a movable cursor.
///
/// Snapshots are stored oldest first. The cursor marks the "current" one;
/// entries past the cursor are redo candidates and are discarded by the
/// next `save`.
use crate::config::HistoryConfig;
use crate::error::HistoryError;

/// Where the cursor sits relative to the ends of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// No snapshots recorded.
    Empty,
    /// Cursor on the oldest of several snapshots; only redo is possible.
    AtOldest,
    /// Both undo and redo are possible.
    Middle,
    /// Cursor on the newest snapshot. A single-entry history is here too.
    AtNewest,
}

/// Manages the undo/redo history of a single originator.
///
/// The manager never looks inside a snapshot; `S` carries no trait bounds.
/// It is owned by whoever coordinates editing and has no internal locking.
#[derive(Debug, Clone)]
pub struct HistoryManager<S> {
    /// Snapshots in chronological order (oldest first).
    snapshots: Vec<S>,
    /// Index of the current snapshot, `None` when empty.
    position: Option<usize>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<S> Default for HistoryManager<S> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<S> HistoryManager<S> {
    /// Creates a new empty history.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            snapshots: Vec::new(),
            position: None,
            config,
        }
    }

    /// Creates an empty history that never evicts snapshots.
    pub fn unbounded() -> Self {
        Self::new(HistoryConfig::unbounded())
    }

    /// Returns the configuration this history was created with.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Records a snapshot as the new current state.
    ///
    /// Drops every snapshot after the cursor first, so a save following an
    /// undo permanently discards the redo branch. When a depth limit is set,
    /// the oldest snapshots are evicted to stay within it.
    pub fn save(&mut self, snapshot: S) {
        let keep = self.position.map_or(0, |p| p + 1);
        if keep < self.snapshots.len() {
            let discarded = self.snapshots.len() - keep;
            self.snapshots.truncate(keep);
            tracing::debug!("Discarded {discarded} redo snapshot(s)");
        }

        self.snapshots.push(snapshot);

        if self.config.is_bounded() && self.snapshots.len() > self.config.max_depth {
            let excess = self.snapshots.len() - self.config.max_depth;
            self.snapshots.drain(..excess);
            tracing::debug!("Evicted {excess} oldest snapshot(s)");
        }

        self.position = Some(self.snapshots.len() - 1);
    }

    /// Steps the cursor back and returns the snapshot it lands on.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] when the history is empty or
    /// the cursor is already on the oldest snapshot. The cursor is unchanged.
    pub fn undo(&mut self) -> Result<&S, HistoryError> {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                Ok(&self.snapshots[p - 1])
            }
            _ => Err(HistoryError::NothingToUndo),
        }
    }

    /// Steps the cursor forward and returns the snapshot it lands on.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] when the history is empty or
    /// the cursor is already on the newest snapshot. The cursor is unchanged.
    pub fn redo(&mut self) -> Result<&S, HistoryError> {
        match self.position {
            Some(p) if p + 1 < self.snapshots.len() => {
                self.position = Some(p + 1);
                Ok(&self.snapshots[p + 1])
            }
            _ => Err(HistoryError::NothingToRedo),
        }
    }

    /// Returns the snapshot under the cursor, or `None` if empty.
    pub fn current(&self) -> Option<&S> {
        self.position.and_then(|p| self.snapshots.get(p))
    }

    /// Drops every snapshot and resets the cursor.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.position = None;
    }

    /// Whether `undo` would succeed.
    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    /// Whether `redo` would succeed.
    pub fn can_redo(&self) -> bool {
        self.redo_depth() > 0
    }

    /// Number of successful `undo` calls available from here.
    pub fn undo_depth(&self) -> usize {
        self.position.unwrap_or(0)
    }

    /// Number of successful `redo` calls available from here.
    pub fn redo_depth(&self) -> usize {
        match self.position {
            Some(p) => self.snapshots.len() - p - 1,
            None => 0,
        }
    }

    /// Index of the current snapshot, `None` when empty.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Total number of snapshots, including redo candidates.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no snapshot has been saved.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates over all snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.snapshots.iter()
    }

    /// Classifies the cursor position.
    pub fn state(&self) -> HistoryState {
        match self.position {
            None => HistoryState::Empty,
            Some(p) if p + 1 == self.snapshots.len() => HistoryState::AtNewest,
            Some(0) => HistoryState::AtOldest,
            Some(_) => HistoryState::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[&'static str]) -> HistoryManager<&'static str> {
        let mut mgr = HistoryManager::unbounded();
        for item in items {
            mgr.save(*item);
        }
        mgr
    }

    // --- Basic undo/redo ---

    #[test]
    fn test_fresh_history_is_empty() {
        let mgr: HistoryManager<String> = HistoryManager::default();
        assert!(mgr.is_empty());
        assert_eq!(mgr.current(), None);
        assert_eq!(mgr.position(), None);
        assert_eq!(mgr.state(), HistoryState::Empty);
    }

    #[test]
    fn test_save_moves_cursor_to_newest() {
        let mgr = history_of(&["a", "b", "c"]);
        assert_eq!(mgr.current(), Some(&"c"));
        assert_eq!(mgr.position(), Some(2));
        assert_eq!(mgr.len(), 3);
        assert_eq!(mgr.state(), HistoryState::AtNewest);
    }

    #[test]
    fn test_undo_returns_predecessor() {
        let mut mgr = history_of(&["a", "b"]);
        assert_eq!(mgr.undo(), Ok(&"a"));
        assert_eq!(mgr.current(), Some(&"a"));
        assert_eq!(mgr.state(), HistoryState::AtOldest);
    }

    #[test]
    fn test_undo_then_redo_restores_current() {
        let mut mgr = history_of(&["a", "b", "c"]);
        mgr.undo().expect("undo");
        assert_eq!(mgr.state(), HistoryState::Middle);
        assert_eq!(mgr.redo(), Ok(&"c"));
        assert_eq!(mgr.current(), Some(&"c"));
    }

    #[test]
    fn test_undo_on_empty_fails_and_stays_empty() {
        let mut mgr: HistoryManager<u32> = HistoryManager::unbounded();
        assert_eq!(mgr.undo(), Err(HistoryError::NothingToUndo));
        assert!(mgr.is_empty());
        assert_eq!(mgr.position(), None);
    }

    #[test]
    fn test_redo_on_empty_fails() {
        let mut mgr: HistoryManager<u32> = HistoryManager::unbounded();
        assert_eq!(mgr.redo(), Err(HistoryError::NothingToRedo));
    }

    #[test]
    fn test_undo_blocked_at_oldest_keeps_cursor() {
        let mut mgr = history_of(&["only"]);
        assert_eq!(mgr.undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(mgr.position(), Some(0));
        assert_eq!(mgr.current(), Some(&"only"));
        assert_eq!(mgr.state(), HistoryState::AtNewest);
    }

    #[test]
    fn test_redo_blocked_at_newest_keeps_cursor() {
        let mut mgr = history_of(&["a", "b"]);
        assert_eq!(mgr.redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(mgr.position(), Some(1));
    }

    #[test]
    fn test_undo_count_after_saves() {
        let mut mgr = history_of(&["1", "2", "3", "4", "5"]);
        let mut undone = 0;
        while mgr.undo().is_ok() {
            undone += 1;
        }
        assert_eq!(undone, 4);
        assert_eq!(mgr.current(), Some(&"1"));
    }

    #[test]
    fn test_redo_cleared_on_new_save() {
        let mut mgr = history_of(&["a", "b", "c"]);
        mgr.undo().expect("undo");
        mgr.undo().expect("undo");
        assert!(mgr.can_redo());

        mgr.save("x");
        assert!(!mgr.can_redo());
        assert_eq!(mgr.redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(mgr.iter().copied().collect::<Vec<_>>(), vec!["a", "x"]);
    }

    #[test]
    fn test_clear() {
        let mut mgr = history_of(&["a", "b", "c"]);
        mgr.undo().expect("undo");
        mgr.clear();
        assert_eq!(mgr.current(), None);
        assert_eq!(mgr.undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(mgr.redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(mgr.state(), HistoryState::Empty);
    }

    #[test]
    fn test_save_after_clear_starts_fresh() {
        let mut mgr = history_of(&["a", "b"]);
        mgr.clear();
        mgr.save("c");
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.current(), Some(&"c"));
    }

    #[test]
    fn test_depth_counters() {
        let mut mgr = history_of(&["a", "b", "c", "d"]);
        assert_eq!((mgr.undo_depth(), mgr.redo_depth()), (3, 0));
        mgr.undo().expect("undo");
        mgr.undo().expect("undo");
        assert_eq!((mgr.undo_depth(), mgr.redo_depth()), (1, 2));
    }

    // --- Depth limit ---

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut mgr = HistoryManager::new(HistoryConfig::bounded(3));
        assert_eq!(mgr.config().max_depth, 3);
        for i in 0..10 {
            mgr.save(i);
        }
        assert_eq!(mgr.len(), 3);
        assert_eq!(mgr.current(), Some(&9));
        assert_eq!(mgr.position(), Some(2));
        assert_eq!(mgr.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn test_max_depth_after_undo_truncates_before_evicting() {
        let mut mgr = HistoryManager::new(HistoryConfig::bounded(3));
        for i in 0..3 {
            mgr.save(i);
        }
        mgr.undo().expect("undo");
        mgr.save(10);
        // Redo branch (2) is dropped first, so nothing needs evicting.
        assert_eq!(mgr.iter().copied().collect::<Vec<_>>(), vec![0, 1, 10]);
    }

    #[test]
    fn test_default_history_keeps_every_snapshot() {
        let mut mgr = HistoryManager::default();
        for i in 0..10_002 {
            mgr.save(i);
        }
        assert_eq!(mgr.len(), 10_002);

        let mut undone = 0;
        while mgr.undo().is_ok() {
            undone += 1;
        }
        assert_eq!(undone, 10_001);
        assert_eq!(mgr.current(), Some(&0));
    }

    #[test]
    fn test_unbounded_never_evicts() {
        let mut mgr = HistoryManager::unbounded();
        for i in 0..20_000 {
            mgr.save(i);
        }
        assert_eq!(mgr.len(), 20_000);
    }
}

use thiserror::Error;

/// Failure to move the history cursor.
///
/// Both variants are expected, recoverable conditions: callers typically
/// no-op (or disable the matching menu entry) instead of treating them as faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The cursor is already at the oldest snapshot, or the history is empty.
    #[error("nothing to undo")]
    NothingToUndo,
    /// The cursor is already at the newest snapshot, or the history is empty.
    #[error("nothing to redo")]
    NothingToRedo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(HistoryError::NothingToUndo.to_string(), "nothing to undo");
        assert_eq!(HistoryError::NothingToRedo.to_string(), "nothing to redo");
    }

    #[test]
    fn test_converts_into_anyhow_style_boxed_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(HistoryError::NothingToRedo);
        assert_eq!(err.to_string(), "nothing to redo");
    }
}

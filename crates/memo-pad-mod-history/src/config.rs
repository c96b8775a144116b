/// Depth limit used by default: none, every snapshot is kept.
const DEFAULT_MAX_DEPTH: usize = 0;

/// Configuration for the history manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots retained. `0` disables the limit.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// A configuration that never evicts snapshots.
    pub fn unbounded() -> Self {
        Self { max_depth: 0 }
    }

    /// A configuration that keeps at most `max_depth` snapshots.
    ///
    /// Passing `0` is the same as [`HistoryConfig::unbounded`].
    pub fn bounded(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns true when a depth limit is in effect.
    pub fn is_bounded(&self) -> bool {
        self.max_depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unbounded() {
        let config = HistoryConfig::default();
        assert_eq!(config, HistoryConfig::unbounded());
        assert!(!config.is_bounded());
    }

    #[test]
    fn test_unbounded_config() {
        let config = HistoryConfig::unbounded();
        assert_eq!(config.max_depth, 0);
        assert!(!config.is_bounded());
    }

    #[test]
    fn test_bounded_config() {
        assert!(HistoryConfig::bounded(50).is_bounded());
        assert_eq!(HistoryConfig::bounded(0), HistoryConfig::unbounded());
    }
}

// Re-exports from memo-pad-mod-history and the bridge from app config.
pub use memo_pad_mod_history::{HistoryConfig, HistoryError, HistoryManager, HistoryState};

use memo_pad_config::AppConfig;

/// Builds the history configuration from the application config.
pub fn history_config(config: &AppConfig) -> HistoryConfig {
    HistoryConfig::bounded(config.max_history_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_from_app_config() {
        let mut app = AppConfig::default();
        app.max_history_depth = 12;
        assert_eq!(history_config(&app).max_depth, 12);
    }

    #[test]
    fn test_zero_depth_is_unbounded() {
        let mut app = AppConfig::default();
        app.max_history_depth = 0;
        assert!(!history_config(&app).is_bounded());
    }
}

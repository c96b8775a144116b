/// Application configuration: load, save, and sanitize.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log levels accepted by `log_level`.
const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max snapshots kept in the undo history. 0 = unlimited.
    pub max_history_depth: usize,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Whether `show` prints the cursor position after the text.
    pub show_cursor: bool,
    /// Prompt printed before each interactive command.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_depth: 10_000,
            log_level: "info".to_string(),
            show_cursor: true,
            prompt: "> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `memo-pad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("memo-pad.json")))
            .unwrap_or_else(|| PathBuf::from("memo-pad.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Resets invalid fields to their defaults.
    pub fn sanitize(&mut self) {
        let level = self.log_level.trim().to_ascii_lowercase();
        self.log_level = if VALID_LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            "info".to_string()
        };
        if self.prompt.is_empty() {
            self.prompt = "> ".to_string();
        }
    }
}

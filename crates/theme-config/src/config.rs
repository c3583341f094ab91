//! Configuration management for the watcher.

use crate::{ConfigError, ConfigResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default log level. Kept quiet because stdout carries theme output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Delay before a monitor process that exited is started again.
pub const DEFAULT_RESTART_DELAY_MS: u64 = 1_000;

/// Upper bound for a single `gdbus call`.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;

const ENV_LOG_LEVEL: &str = "GNOME_THEME_WATCHER_LOG_LEVEL";
const ENV_RESTART_DELAY_MS: &str = "GNOME_THEME_WATCHER_RESTART_DELAY_MS";

/// Watcher configuration, read from `config.json` in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Explicit `gdbus` executable. `GDBUS_PATH` still takes precedence.
    pub gdbus_path: Option<String>,
    /// Milliseconds to wait before restarting an exited monitor.
    pub restart_delay_ms: u64,
    /// Timeout for the one-shot query.
    pub query_timeout_secs: u64,
    /// Scripts directory; defaults to `<config_dir>/scripts`.
    pub scripts_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            gdbus_path: None,
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
            scripts_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file, falling back to defaults,
    /// then apply environment overrides.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Override configuration from environment variables.
    fn load_from_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_LOG_LEVEL).and_then(non_empty) {
            self.log_level = level;
        }

        if let Some(raw) = lookup(ENV_RESTART_DELAY_MS).and_then(non_empty) {
            match raw.parse::<u64>() {
                Ok(delay) => self.restart_delay_ms = delay,
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid {}", ENV_RESTART_DELAY_MS)
                }
            }
        }
    }

    /// Resolve the scripts directory against the given paths.
    pub fn scripts_dir(&self, paths: &Paths) -> PathBuf {
        self.scripts_dir
            .clone()
            .unwrap_or_else(|| paths.scripts_dir())
    }
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

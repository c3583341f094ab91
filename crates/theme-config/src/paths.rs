//! File system paths for the watcher.

use crate::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Directory name under `~/.config`.
const APP_DIR_NAME: &str = "gnome-theme-watcher";
/// JSONL log filename under the logs directory.
const LOG_FILE_NAME: &str = "theme-watcher.jsonl";

/// Manages file system paths for the watcher.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/gnome-theme-watcher)
    config_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.config/gnome-theme-watcher`.
    ///
    /// The home directory comes from `HOME` on Linux.
    pub fn new() -> ConfigResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConfigError::Path("Could not determine home directory".to_string()))?;

        Ok(Self::with_home_dir(&home))
    }

    /// Create a Paths instance for an explicit home directory.
    pub fn with_home_dir(home: &Path) -> Self {
        Self {
            config_dir: home.join(".config").join(APP_DIR_NAME),
        }
    }

    /// Create a new Paths instance with a custom configuration directory.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the configuration directory (~/.config/gnome-theme-watcher).
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Get the config file path (~/.config/gnome-theme-watcher/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the scripts directory (~/.config/gnome-theme-watcher/scripts).
    pub fn scripts_dir(&self) -> PathBuf {
        self.config_dir.join("scripts")
    }

    /// Get the logs directory (~/.config/gnome-theme-watcher/logs).
    pub fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }

    /// Get the JSONL log file path.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE_NAME)
    }
}

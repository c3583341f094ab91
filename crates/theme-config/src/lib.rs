//! Paths, configuration, and logging bootstrap for gnome-theme-watcher.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DEFAULT_LOG_LEVEL, DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RESTART_DELAY_MS,
};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_logging;
pub use paths::Paths;

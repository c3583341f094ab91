//! CLI command implementations.

mod query;
mod watch;

pub use query::query;
pub use watch::{serve, watch};

use gdbus_ops::{resolve_gdbus_executable, GdbusCommandRunner};
use scheme_monitor::MonitorConfig;
use script_runner::ScriptRunner;
use std::time::Duration;
use theme_config::{Config, Paths};

/// What the binary does, derived from the mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the current state once.
    Query,
    /// Print every change.
    Watch,
    /// Run scripts on every change.
    Server,
}

impl Mode {
    /// `--watch` wins over `--server`; neither means a single query.
    pub fn from_flags(watch: bool, server: bool) -> Self {
        match (watch, server) {
            (true, _) => Self::Watch,
            (false, true) => Self::Server,
            (false, false) => Self::Query,
        }
    }
}

/// Resolved paths and configuration shared by the commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: Paths,
    pub config: Config,
}

impl AppContext {
    pub fn new(paths: Paths, config: Config) -> Self {
        Self { paths, config }
    }

    pub fn gdbus_executable(&self) -> String {
        resolve_gdbus_executable(self.config.gdbus_path.as_deref())
    }

    pub fn command_runner(&self) -> GdbusCommandRunner {
        GdbusCommandRunner::with_executable(self.gdbus_executable())
    }

    pub fn monitor_config(&self, once: bool) -> MonitorConfig {
        MonitorConfig::with_executable(self.gdbus_executable())
            .with_restart_delay(Duration::from_millis(self.config.restart_delay_ms))
            .with_once(once)
    }

    pub fn script_runner(&self) -> ScriptRunner {
        ScriptRunner::new(self.config.scripts_dir(&self.paths))
    }
}

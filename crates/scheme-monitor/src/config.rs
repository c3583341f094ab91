//! Configuration for the monitor process.

use std::time::Duration;

/// Delay before restarting a monitor that exited.
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(1);

/// Configuration for spawning and supervising the monitor process.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Program to run.
    pub executable: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Wait between a monitor exit and the next start.
    pub restart_delay: Duration,

    /// Stop after the first reported change instead of watching forever.
    pub once: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorConfig {
    /// `gdbus monitor` on the settings portal, resolved the usual way.
    pub fn new() -> Self {
        Self::with_command(
            gdbus_ops::resolve_gdbus_executable(None),
            gdbus_ops::monitor_args(),
        )
    }

    /// `gdbus monitor` using the given gdbus executable.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self::with_command(executable, gdbus_ops::monitor_args())
    }

    /// An arbitrary command whose stdout follows the `gdbus monitor` format.
    pub fn with_command(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
            restart_delay: DEFAULT_RESTART_DELAY,
            once: false,
        }
    }

    /// Set the restart delay.
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    /// Set one-shot mode.
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Human-readable command line for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_monitors_portal() {
        let config = MonitorConfig::new();
        assert_eq!(config.args[0], "monitor");
        assert_eq!(config.restart_delay, DEFAULT_RESTART_DELAY);
        assert!(!config.once);
    }

    #[test]
    fn test_config_builders() {
        let config = MonitorConfig::with_executable("/opt/gdbus")
            .with_restart_delay(Duration::from_millis(250))
            .with_once(true);

        assert_eq!(config.executable, "/opt/gdbus");
        assert_eq!(config.restart_delay, Duration::from_millis(250));
        assert!(config.once);
    }

    #[test]
    fn test_command_line() {
        let config = MonitorConfig::with_command("sh", vec!["-c".into(), "true".into()]);
        assert_eq!(config.command_line(), "sh -c true");
    }
}

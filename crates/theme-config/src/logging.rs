//! Logging initialization.
//!
//! Thin wrapper over the observability package so the binary only has to
//! know its resolved log level and paths.

use crate::Paths;

/// Service name written into structured log entries.
const SERVICE_NAME: &str = "theme-watcher";

/// Initialize the logging system.
///
/// Logs go to stderr. With the `dev` feature they are also appended to
/// [`Paths::log_file`]. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str, paths: &Paths) {
    observability::init_with_config(observability::LogConfig {
        service_name: SERVICE_NAME.into(),
        default_level: level.into(),
        log_path: Some(paths.log_file()),
        also_stderr: true,
    });
}

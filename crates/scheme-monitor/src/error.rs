//! Error types for the scheme monitor.

use thiserror::Error;

/// Scheme monitor error type.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The monitor executable does not exist.
    #[error("gdbus is not installed (tried {executable})")]
    GdbusNotInstalled { executable: String },

    /// Failed to spawn the monitor process.
    #[error("Failed to spawn monitor process: {0}")]
    SpawnFailed(#[from] std::io::Error),

    /// Failed to get stdout from the process.
    #[error("Failed to get stdout from monitor process")]
    NoStdout,
}

/// Result type for scheme monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

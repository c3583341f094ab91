use thiserror::Error;

/// Error taxonomy for gdbus orchestration.
#[derive(Debug, Error)]
pub enum GdbusError {
    #[error("gdbus is not installed")]
    GdbusNotInstalled,

    #[error("Settings portal is unavailable: {message}")]
    PortalUnavailable { message: String },

    #[error("Setting not found: {message}")]
    SettingNotFound { message: String },

    #[error("gdbus command failed: {message}")]
    CommandFailed {
        message: String,
        exit_code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    #[error("gdbus command timed out after {timeout_secs}s: {command}")]
    Timeout { command: String, timeout_secs: u64 },
}

impl GdbusError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GdbusNotInstalled => "gdbus_not_installed",
            Self::PortalUnavailable { .. } => "portal_unavailable",
            Self::SettingNotFound { .. } => "setting_not_found",
            Self::CommandFailed { .. } => "command_failed",
            Self::Timeout { .. } => "timeout",
        }
    }
}

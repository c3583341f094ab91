use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for script execution.
#[derive(Debug, Error)]
pub enum ScriptRunnerError {
    #[error("failed to read scripts directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn script: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("script exited with code {exit_code:?}: {stderr}")]
    NonZeroExit {
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl ScriptRunnerError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReadDir { .. } => "read_dir",
            Self::Spawn(_) => "spawn_failed",
            Self::NonZeroExit { .. } => "non_zero_exit",
        }
    }
}

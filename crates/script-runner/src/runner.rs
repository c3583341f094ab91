use crate::ScriptRunnerError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Argument passed to every script.
pub fn theme_arg(is_dark: bool) -> &'static str {
    if is_dark {
        "1"
    } else {
        "0"
    }
}

/// A script that could not be run successfully.
#[derive(Debug)]
pub struct ScriptFailure {
    pub path: PathBuf,
    pub error: ScriptRunnerError,
}

/// Outcome of one pass over the scripts directory.
#[derive(Debug, Default)]
pub struct ScriptRunReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<ScriptFailure>,
}

impl ScriptRunReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Runs the scripts found in one directory.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    scripts_dir: PathBuf,
}

impl ScriptRunner {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Script paths in file-name order. Directories are skipped.
    pub async fn list_scripts(&self) -> Result<Vec<PathBuf>, ScriptRunnerError> {
        let read_dir_error = |source| ScriptRunnerError::ReadDir {
            path: self.scripts_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.scripts_dir)
            .await
            .map_err(read_dir_error)?;

        let mut scripts = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_dir() => {
                    debug!(path = %path.display(), "Skipping directory in scripts dir");
                }
                _ => scripts.push(path),
            }
        }

        scripts.sort();
        Ok(scripts)
    }

    /// Run every script with `1` (dark) or `0` (light).
    ///
    /// Only a directory read failure is returned as an error; individual
    /// script failures are logged and collected in the report.
    pub async fn run_all(&self, is_dark: bool) -> Result<ScriptRunReport, ScriptRunnerError> {
        let scripts = self.list_scripts().await?;
        let arg = theme_arg(is_dark);

        let mut report = ScriptRunReport::default();
        for path in scripts {
            match run_script(&path, arg).await {
                Ok(()) => report.succeeded.push(path),
                Err(error) => {
                    warn!(
                        script = %path.display(),
                        code = error.code(),
                        error = %error,
                        "Script failed"
                    );
                    report.failed.push(ScriptFailure { path, error });
                }
            }
        }

        info!(
            arg,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "Ran theme scripts"
        );
        Ok(report)
    }
}

async fn run_script(path: &Path, arg: &str) -> Result<(), ScriptRunnerError> {
    debug!(script = %path.display(), arg, "Running script");

    let output = Command::new(path)
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        debug!(script = %path.display(), stdout = %stdout.trim(), "Script output");
    }

    if output.status.success() {
        return Ok(());
    }

    Err(ScriptRunnerError::NonZeroExit {
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

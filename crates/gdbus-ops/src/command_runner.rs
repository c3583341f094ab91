use crate::GdbusError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

const GDBUS_PATH_ENV: &str = "GDBUS_PATH";

/// Raw command output from a gdbus subprocess.
#[derive(Debug, Clone)]
pub struct CommandRunOutput {
    pub stdout: String,
}

/// Responsible for locating and executing `gdbus`.
#[derive(Debug, Clone)]
pub struct GdbusCommandRunner {
    executable: String,
}

impl Default for GdbusCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GdbusCommandRunner {
    pub fn new() -> Self {
        Self {
            executable: resolve_gdbus_executable(None),
        }
    }

    /// Use exactly this executable, bypassing resolution.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub async fn run(
        &self,
        args: &[String],
        timeout_secs: u64,
    ) -> Result<CommandRunOutput, GdbusError> {
        let command_repr = format!("{} {}", self.executable, args.join(" "));

        let mut cmd = Command::new(&self.executable);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!(command = %command_repr, "running gdbus");

        let output = match timeout(Duration::from_secs(timeout_secs), cmd.output()).await {
            Err(_) => {
                return Err(GdbusError::Timeout {
                    command: command_repr,
                    timeout_secs,
                });
            }
            Ok(Err(err)) => {
                return if err.kind() == std::io::ErrorKind::NotFound {
                    Err(GdbusError::GdbusNotInstalled)
                } else {
                    Err(GdbusError::CommandFailed {
                        message: format!("failed to execute gdbus command: {err}"),
                        exit_code: None,
                        stderr: String::new(),
                        stdout: String::new(),
                    })
                };
            }
            Ok(Ok(output)) => output,
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let exit_code = output.status.code();

        if output.status.success() {
            return Ok(CommandRunOutput { stdout });
        }

        Err(classify_failed_command(exit_code, &stdout, &stderr))
    }
}

/// Pick the gdbus executable: `GDBUS_PATH`, then `configured`, then the
/// usual install locations, then a bare `gdbus` for `PATH` lookup.
pub fn resolve_gdbus_executable(configured: Option<&str>) -> String {
    let from_env = std::env::var(GDBUS_PATH_ENV).ok();
    resolve_from(from_env.as_deref(), configured)
}

fn resolve_from(from_env: Option<&str>, configured: Option<&str>) -> String {
    for explicit in [from_env, configured].into_iter().flatten() {
        let trimmed = explicit.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    for candidate in ["/usr/bin/gdbus", "/usr/local/bin/gdbus"] {
        if Path::new(candidate).exists() {
            return candidate.to_string();
        }
    }

    "gdbus".to_string()
}

fn classify_failed_command(exit_code: Option<i32>, stdout: &str, stderr: &str) -> GdbusError {
    let combined = format!("{stderr}\n{stdout}").to_ascii_lowercase();

    if combined.contains("serviceunknown")
        || combined.contains("namehasnoowner")
        || combined.contains("could not connect")
        || combined.contains("cannot autolaunch")
    {
        return GdbusError::PortalUnavailable {
            message: non_empty(stderr, stdout, "settings portal is unavailable"),
        };
    }

    if combined.contains("unknownmethod")
        || combined.contains("unknowninterface")
        || combined.contains("not found")
    {
        return GdbusError::SettingNotFound {
            message: non_empty(stderr, stdout, "setting not found"),
        };
    }

    GdbusError::CommandFailed {
        message: non_empty(
            stderr,
            stdout,
            &format!("gdbus command failed with exit code {:?}", exit_code),
        ),
        exit_code,
        stderr: stderr.to_string(),
        stdout: stdout.to_string(),
    }
}

fn non_empty(primary: &str, secondary: &str, fallback: &str) -> String {
    if !primary.trim().is_empty() {
        primary.to_string()
    } else if !secondary.trim().is_empty() {
        secondary.to_string()
    } else {
        fallback.to_string()
    }
}

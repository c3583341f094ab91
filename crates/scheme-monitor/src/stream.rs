//! Monitor process output streaming.

use crate::config::MonitorConfig;
use crate::error::{MonitorError, MonitorResult};
use crate::event::{parse_monitor_line, MonitorEvent};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

/// How long a finished process's stderr forwarder may keep flushing.
const STDERR_FLUSH_GRACE: Duration = Duration::from_millis(200);

/// A running monitor process and the events read from its stdout.
pub struct MonitorStream {
    /// Buffered stdout reader.
    stdout: Lines<BufReader<ChildStdout>>,
    /// Forwards stderr to the log while the process runs.
    stderr_task: Option<JoinHandle<()>>,
    /// The child process (for waiting and killing).
    child: Child,
    /// Whether the process has finished.
    finished: bool,
}

impl MonitorStream {
    /// Spawn the monitor process described by `config`.
    pub fn spawn(config: &MonitorConfig) -> MonitorResult<Self> {
        debug!(command = %config.command_line(), "Spawning monitor process");

        let mut child = Command::new(&config.executable)
            .args(&config.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    MonitorError::GdbusNotInstalled {
                        executable: config.executable.clone(),
                    }
                } else {
                    MonitorError::SpawnFailed(err)
                }
            })?;

        info!(pid = ?child.id(), "Monitor process spawned");

        let stdout = child.stdout.take().ok_or(MonitorError::NoStdout)?;
        // Read stderr concurrently so a chatty monitor never blocks on a full pipe.
        let stderr_task = child
            .stderr
            .take()
            .map(|stderr| tokio::spawn(forward_stderr(stderr)));

        Ok(Self {
            stdout: BufReader::new(stdout).lines(),
            stderr_task,
            child,
            finished: false,
        })
    }

    /// Get the next event from the stream.
    ///
    /// Returns `None` once the process has finished or was killed.
    pub async fn next(&mut self) -> Option<MonitorEvent> {
        if self.finished {
            return None;
        }

        loop {
            match self.stdout.next_line().await {
                Ok(Some(line)) => {
                    if let Some(scheme) = parse_monitor_line(&line) {
                        return Some(MonitorEvent::Scheme(scheme));
                    }
                    trace!(line = %line, "Skipping monitor line");
                }
                Ok(None) => return Some(self.finish_process().await),
                Err(e) => {
                    warn!(error = %e, "Error reading monitor stdout");
                    return Some(self.finish_process().await);
                }
            }
        }
    }

    /// Kill the process and wait for it to exit.
    pub async fn kill(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        debug!(pid = ?self.child.id(), "Killing monitor process");
        if let Err(e) = self.child.kill().await {
            warn!(error = %e, "Failed to kill monitor process");
        }
        self.stop_stderr_forwarding().await;
    }

    /// Reap the process and let the stderr forwarder catch up.
    async fn finish_process(&mut self) -> MonitorEvent {
        self.finished = true;

        let status = self.child.wait().await;
        self.stop_stderr_forwarding().await;

        match status {
            Ok(status) => MonitorEvent::Finished {
                success: status.success(),
                exit_code: status.code(),
            },
            Err(e) => {
                warn!(error = %e, "Error waiting for monitor process");
                MonitorEvent::Finished {
                    success: false,
                    exit_code: None,
                }
            }
        }
    }

    /// Check if the stream has finished.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Give the forwarder a moment to log what is still buffered, then
    /// abort it in case a leftover grandchild keeps the pipe open.
    async fn stop_stderr_forwarding(&mut self) {
        if let Some(mut task) = self.stderr_task.take() {
            if tokio::time::timeout(STDERR_FLUSH_GRACE, &mut task).await.is_err() {
                task.abort();
            }
        }
    }
}

impl Drop for MonitorStream {
    fn drop(&mut self) {
        if let Some(task) = self.stderr_task.take() {
            task.abort();
        }
    }
}

async fn forward_stderr(stderr: ChildStderr) {
    let mut lines = BufReader::new(stderr).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => warn!(stderr = %line, "Monitor stderr"),
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, "Stopped reading monitor stderr");
                break;
            }
        }
    }
}

impl std::fmt::Debug for MonitorStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorStream")
            .field("pid", &self.child.id())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

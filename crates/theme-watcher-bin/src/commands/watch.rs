use super::AppContext;
use crate::output::{render, OutputFormat, ThemeState};
use async_trait::async_trait;
use scheme_monitor::{SchemeHandler, SchemeWatcher};
use script_runner::ScriptRunner;
use std::io::Write;
use tracing::{error, info};

/// Writes one line per change.
pub struct PrintHandler<W> {
    out: W,
    format: OutputFormat,
}

impl PrintHandler<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write + Send> PrintHandler<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> SchemeHandler for PrintHandler<W> {
    async fn on_change(&mut self, is_dark: bool) {
        let line = render(&ThemeState::from_is_dark(is_dark), self.format);
        // Flushed per line so piped consumers see changes immediately.
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            error!(error = %e, "Failed to write theme change");
        }
    }
}

/// Runs the scripts directory on every change.
pub struct ScriptHandler {
    runner: ScriptRunner,
}

impl ScriptHandler {
    pub fn new(runner: ScriptRunner) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl SchemeHandler for ScriptHandler {
    async fn on_change(&mut self, is_dark: bool) {
        match self.runner.run_all(is_dark).await {
            Ok(report) if report.total() == 0 => {
                info!(dir = %self.runner.scripts_dir().display(), "No scripts to run");
            }
            Ok(_) => {}
            Err(e) => {
                error!(code = e.code(), error = %e, "Failed to run theme scripts");
            }
        }
    }
}

/// Print every change to stdout.
pub async fn watch(ctx: &AppContext, format: OutputFormat, once: bool) -> anyhow::Result<()> {
    let watcher = SchemeWatcher::new(ctx.monitor_config(once));
    watcher.run(&mut PrintHandler::stdout(format)).await?;
    Ok(())
}

/// Run the scripts directory on every change.
pub async fn serve(ctx: &AppContext, once: bool) -> anyhow::Result<()> {
    let runner = ctx.script_runner();
    info!(dir = %runner.scripts_dir().display(), "Serving theme scripts");

    let watcher = SchemeWatcher::new(ctx.monitor_config(once));
    watcher.run(&mut ScriptHandler::new(runner)).await?;
    Ok(())
}

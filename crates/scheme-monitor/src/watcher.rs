//! Supervision loop around the monitor process.

use crate::config::MonitorConfig;
use crate::error::MonitorResult;
use crate::event::{ChangeDetector, MonitorEvent};
use crate::stream::MonitorStream;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Receives color-scheme changes.
#[async_trait]
pub trait SchemeHandler: Send {
    async fn on_change(&mut self, is_dark: bool);
}

/// Watches the color scheme by (re)starting the monitor process.
#[derive(Debug, Clone)]
pub struct SchemeWatcher {
    config: MonitorConfig,
}

impl SchemeWatcher {
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Run until one-shot mode completes, or forever.
    ///
    /// Each monitor lifetime gets a fresh [`ChangeDetector`], so the first
    /// signal after a restart is always reported. In one-shot mode the
    /// monitor is killed after the first report and this returns; it also
    /// returns if the monitor exits before reporting anything.
    pub async fn run<H>(&self, handler: &mut H) -> MonitorResult<()>
    where
        H: SchemeHandler + ?Sized,
    {
        loop {
            let mut stream = MonitorStream::spawn(&self.config)?;
            let mut detector = ChangeDetector::new();

            while let Some(event) = stream.next().await {
                match event {
                    MonitorEvent::Scheme(scheme) => {
                        let is_dark = scheme.is_dark();
                        if !detector.observe(is_dark) {
                            debug!(color_scheme = %scheme, "Color scheme unchanged");
                            continue;
                        }

                        info!(color_scheme = %scheme, is_dark, "Color scheme changed");
                        handler.on_change(is_dark).await;

                        if self.config.once {
                            stream.kill().await;
                            break;
                        }
                    }
                    MonitorEvent::Finished { success, exit_code } => {
                        if success {
                            info!(?exit_code, "Monitor process exited");
                        } else {
                            warn!(?exit_code, "Monitor process exited with failure");
                        }
                    }
                }
            }

            if self.config.once {
                return Ok(());
            }

            debug!(delay = ?self.config.restart_delay, "Restarting monitor process");
            tokio::time::sleep(self.config.restart_delay).await;
        }
    }
}

//! Scheme Monitor: color-scheme watcher built on `gdbus monitor`.
//!
//! The monitor process is spawned, its stdout is read line by line, and
//! `SettingChanged` signals for the `color-scheme` key are turned into
//! [`MonitorEvent`]s. [`SchemeWatcher`] supervises the process and hands
//! every change of `is_dark` to a [`SchemeHandler`].
//!
//! ```text
//!  SchemeWatcher::run ──► MonitorStream::spawn ──► gdbus monitor
//!        ▲                       │ stdout lines
//!        │                       ▼
//!        │               parse_monitor_line
//!        │                       │ MonitorEvent
//!        │                       ▼
//!        └── restart ◄── ChangeDetector ──► SchemeHandler::on_change
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use scheme_monitor::{MonitorConfig, SchemeHandler, SchemeWatcher};
//!
//! struct Print;
//!
//! #[async_trait::async_trait]
//! impl SchemeHandler for Print {
//!     async fn on_change(&mut self, is_dark: bool) {
//!         println!("{}", u8::from(is_dark));
//!     }
//! }
//!
//! let watcher = SchemeWatcher::new(MonitorConfig::new().with_once(true));
//! watcher.run(&mut Print).await?;
//! ```

mod config;
mod error;
mod event;
mod stream;
mod watcher;

pub use config::{MonitorConfig, DEFAULT_RESTART_DELAY};
pub use error::{MonitorError, MonitorResult};
pub use event::{parse_monitor_line, ChangeDetector, MonitorEvent};
pub use stream::MonitorStream;
pub use watcher::{SchemeHandler, SchemeWatcher};

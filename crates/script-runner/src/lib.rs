//! # Script Runner
//!
//! Executes every file in the scripts directory with the current theme as
//! its only argument: `1` for dark, `0` for light.
//!
//! Scripts run one after another in file-name order. A failing script is
//! logged and recorded in the [`ScriptRunReport`]; the remaining scripts
//! still run.

mod error;
mod runner;

pub use error::ScriptRunnerError;
pub use runner::{theme_arg, ScriptFailure, ScriptRunReport, ScriptRunner};

//! # GDBus Ops
//!
//! Typed `gdbus` orchestration for reading the desktop color scheme.
//!
//! GDBus Ops owns executable resolution, process execution, timeout control,
//! output parsing, and error normalization for the settings portal at
//! `org.freedesktop.portal.Desktop`.

mod command_runner;
mod error;
mod literal;
mod operations;
mod types;

pub use command_runner::{resolve_gdbus_executable, CommandRunOutput, GdbusCommandRunner};
pub use error::GdbusError;
pub use literal::{gnome_scheme_in, portal_scheme_in};
pub use operations::{monitor_args, parse_read_output, read_color_scheme, read_args};
pub use types::{ColorScheme, APPEARANCE_NAMESPACE, COLOR_SCHEME_KEY, GNOME_INTERFACE_NAMESPACE};

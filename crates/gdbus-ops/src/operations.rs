use crate::command_runner::GdbusCommandRunner;
use crate::literal::portal_scheme_in;
use crate::types::{ColorScheme, APPEARANCE_NAMESPACE, COLOR_SCHEME_KEY};
use crate::GdbusError;

const PORTAL_DEST: &str = "org.freedesktop.portal.Desktop";
const PORTAL_OBJECT_PATH: &str = "/org/freedesktop/portal/desktop";
const SETTINGS_READ_METHOD: &str = "org.freedesktop.portal.Settings.Read";

/// Arguments for a one-shot `Settings.Read` of the appearance color scheme.
pub fn read_args() -> Vec<String> {
    vec![
        "call".to_string(),
        "--session".to_string(),
        format!("--dest={PORTAL_DEST}"),
        "--object-path".to_string(),
        PORTAL_OBJECT_PATH.to_string(),
        "--method".to_string(),
        SETTINGS_READ_METHOD.to_string(),
        APPEARANCE_NAMESPACE.to_string(),
        COLOR_SCHEME_KEY.to_string(),
    ]
}

/// Arguments for `gdbus monitor` on the portal object.
pub fn monitor_args() -> Vec<String> {
    vec![
        "monitor".to_string(),
        "--session".to_string(),
        format!("--dest={PORTAL_DEST}"),
        "--object-path".to_string(),
        PORTAL_OBJECT_PATH.to_string(),
    ]
}

/// Read the current color scheme from the settings portal.
pub async fn read_color_scheme(
    runner: &GdbusCommandRunner,
    timeout_secs: u64,
) -> Result<ColorScheme, GdbusError> {
    let output = runner.run(&read_args(), timeout_secs).await?;
    let scheme = parse_read_output(&output.stdout);

    tracing::debug!(color_scheme = %scheme, is_dark = scheme.is_dark(), "read color scheme");
    Ok(scheme)
}

/// Interpret the textual reply of `Settings.Read`.
///
/// `(<<uint32 1>>,)` is dark. A reply without a `uint32` value is treated
/// as having no preference.
pub fn parse_read_output(stdout: &str) -> ColorScheme {
    match portal_scheme_in(stdout) {
        Some(scheme) => scheme,
        None => {
            tracing::warn!(output = %stdout, "no color-scheme value in gdbus reply");
            ColorScheme::NoPreference
        }
    }
}

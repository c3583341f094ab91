//! Monitor output interpretation and change detection.

use gdbus_ops::{
    gnome_scheme_in, portal_scheme_in, ColorScheme, APPEARANCE_NAMESPACE, COLOR_SCHEME_KEY,
    GNOME_INTERFACE_NAMESPACE,
};

/// An event produced while a monitor process runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// A color-scheme signal was seen on stdout.
    Scheme(ColorScheme),

    /// The process has finished.
    Finished {
        /// Whether the process exited successfully.
        success: bool,
        /// Exit code if available.
        exit_code: Option<i32>,
    },
}

/// Parse one line of `gdbus monitor` output.
///
/// Returns `None` for lines that are not a color-scheme `SettingChanged`
/// signal. For GNOME's namespace `<'prefer-dark'>` is dark; for the portal's
/// appearance namespace `<uint32 1>` is dark. A matching line without a
/// recognizable literal counts as no preference.
pub fn parse_monitor_line(line: &str) -> Option<ColorScheme> {
    if !line.contains(COLOR_SCHEME_KEY) {
        return None;
    }

    if line.contains(GNOME_INTERFACE_NAMESPACE) {
        return Some(gnome_scheme_in(line).unwrap_or_default());
    }

    if line.contains(APPEARANCE_NAMESPACE) {
        return Some(portal_scheme_in(line).unwrap_or_default());
    }

    None
}

/// Reports the first observation and every later change of `is_dark`.
#[derive(Debug, Default, Clone)]
pub struct ChangeDetector {
    last: Option<bool>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value; returns true when it should be reported.
    pub fn observe(&mut self, is_dark: bool) -> bool {
        if self.last == Some(is_dark) {
            return false;
        }
        self.last = Some(is_dark);
        true
    }

    /// The last reported value.
    pub fn last(&self) -> Option<bool> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GNOME_DARK: &str = "/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.gnome.desktop.interface', 'color-scheme', <'prefer-dark'>)";
    const GNOME_LIGHT: &str = "/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.gnome.desktop.interface', 'color-scheme', <'default'>)";
    const APPEARANCE_DARK: &str = "/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.freedesktop.appearance', 'color-scheme', <uint32 1>)";
    const APPEARANCE_LIGHT: &str = "/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.freedesktop.appearance', 'color-scheme', <uint32 2>)";

    #[test]
    fn parse_gnome_signals() {
        assert_eq!(parse_monitor_line(GNOME_DARK), Some(ColorScheme::PreferDark));
        assert_eq!(parse_monitor_line(GNOME_LIGHT), Some(ColorScheme::NoPreference));
    }

    #[test]
    fn parse_appearance_signals() {
        assert_eq!(parse_monitor_line(APPEARANCE_DARK), Some(ColorScheme::PreferDark));
        assert_eq!(parse_monitor_line(APPEARANCE_LIGHT), Some(ColorScheme::PreferLight));
    }

    #[test]
    fn skip_unrelated_lines() {
        assert_eq!(
            parse_monitor_line("Monitoring signals on object /org/freedesktop/portal/desktop owned by org.freedesktop.portal.Desktop"),
            None
        );
        assert_eq!(
            parse_monitor_line("/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.gnome.desktop.interface', 'gtk-theme', <'Adwaita-dark'>)"),
            None
        );
        assert_eq!(
            parse_monitor_line("/org/freedesktop/portal/desktop: org.freedesktop.portal.Settings.SettingChanged ('org.gnome.desktop.a11y', 'color-scheme', <'prefer-dark'>)"),
            None
        );
        assert_eq!(parse_monitor_line(""), None);
    }

    #[test]
    fn matching_line_without_literal_is_light() {
        let line = "('org.gnome.desktop.interface', 'color-scheme', <@ms nothing>)";
        assert_eq!(parse_monitor_line(line), Some(ColorScheme::NoPreference));
    }

    #[test]
    fn detector_fires_on_first_observation() {
        let mut detector = ChangeDetector::new();
        assert_eq!(detector.last(), None);
        assert!(detector.observe(false));
        assert_eq!(detector.last(), Some(false));
    }

    #[test]
    fn detector_fires_only_on_transitions() {
        let mut detector = ChangeDetector::new();
        let fired: Vec<bool> = [true, true, false, false, false, true, true]
            .into_iter()
            .filter(|&v| detector.observe(v))
            .collect();

        assert_eq!(fired, vec![true, false, true]);
    }
}

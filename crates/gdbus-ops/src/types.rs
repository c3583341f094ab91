use serde::Serialize;
use std::fmt;

/// Portal namespace carrying the standardized color-scheme key.
pub const APPEARANCE_NAMESPACE: &str = "org.freedesktop.appearance";
/// GNOME namespace mirrored by the portal on GNOME desktops.
pub const GNOME_INTERFACE_NAMESPACE: &str = "org.gnome.desktop.interface";
/// Key name shared by both namespaces.
pub const COLOR_SCHEME_KEY: &str = "color-scheme";

/// Desktop-wide color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    NoPreference,
    PreferDark,
    PreferLight,
}

impl ColorScheme {
    /// Map the portal's `uint32` value. Unknown values have no preference.
    pub fn from_portal_value(value: u32) -> Self {
        match value {
            1 => Self::PreferDark,
            2 => Self::PreferLight,
            _ => Self::NoPreference,
        }
    }

    /// Map GNOME's gsettings enum nick (`default`, `prefer-dark`, `prefer-light`).
    pub fn from_gnome_value(value: &str) -> Self {
        match value {
            "prefer-dark" => Self::PreferDark,
            "prefer-light" => Self::PreferLight,
            _ => Self::NoPreference,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::PreferDark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoPreference => "no-preference",
            Self::PreferDark => "prefer-dark",
            Self::PreferLight => "prefer-light",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

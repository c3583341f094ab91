//! Output formatting for theme state.

use clap::ValueEnum;
use gdbus_ops::ColorScheme;
use serde::Serialize;
use std::fmt;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The state printed for a query or a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    pub is_dark: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
}

impl ThemeState {
    pub fn from_is_dark(is_dark: bool) -> Self {
        Self {
            is_dark,
            color_scheme: None,
        }
    }
}

impl From<ColorScheme> for ThemeState {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            is_dark: scheme.is_dark(),
            color_scheme: Some(scheme),
        }
    }
}

/// `1` when dark, `0` otherwise.
impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(self.is_dark))
    }
}

/// Render one output line (without the newline).
pub fn render(state: &ThemeState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => state.to_string(),
        OutputFormat::Json => serde_json::to_string(state).unwrap_or_else(|_| state.to_string()),
    }
}

/// Print one line to stdout.
pub fn print_state(state: &ThemeState, format: OutputFormat) {
    println!("{}", render(state, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_one_or_zero() {
        assert_eq!(render(&ThemeState::from_is_dark(true), OutputFormat::Text), "1");
        assert_eq!(render(&ThemeState::from_is_dark(false), OutputFormat::Text), "0");
        assert_eq!(
            render(&ThemeState::from(ColorScheme::PreferLight), OutputFormat::Text),
            "0"
        );
    }

    #[test]
    fn json_omits_unknown_scheme() {
        assert_eq!(
            render(&ThemeState::from_is_dark(true), OutputFormat::Json),
            r#"{"is_dark":true}"#
        );
    }

    #[test]
    fn json_includes_known_scheme() {
        assert_eq!(
            render(&ThemeState::from(ColorScheme::PreferDark), OutputFormat::Json),
            r#"{"is_dark":true,"color_scheme":"prefer-dark"}"#
        );
        assert_eq!(
            render(&ThemeState::from(ColorScheme::NoPreference), OutputFormat::Json),
            r#"{"is_dark":false,"color_scheme":"no-preference"}"#
        );
    }
}

//! Extraction of GVariant literals from gdbus text output.

use crate::ColorScheme;

/// Find a `uint32 N` literal and map it through the portal encoding.
///
/// Matches both the `Read` reply `(<<uint32 1>>,)` and the signal payload
/// `<uint32 1>`.
pub fn portal_scheme_in(text: &str) -> Option<ColorScheme> {
    let start = text.find("uint32")? + "uint32".len();
    let digits: String = text[start..]
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse::<u32>().ok().map(ColorScheme::from_portal_value)
}

/// Find a boxed string literal such as `<'prefer-dark'>` and map it through
/// GNOME's enum nicks.
pub fn gnome_scheme_in(text: &str) -> Option<ColorScheme> {
    let start = text.find("<'")? + 2;
    let len = text[start..].find("'>")?;

    Some(ColorScheme::from_gnome_value(&text[start..start + len]))
}

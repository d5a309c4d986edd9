//! Shared theme state for the UI chrome.
//!
//! DESIGN
//! ======
//! A single small value provided as an `RwSignal` context from the app root,
//! so every control and page re-renders from one source of truth instead of
//! re-reading the document class.

use appearance::ColorScheme;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The applied scheme plus the stored preference backing it.
///
/// `preference` is `None` while the OS signal is in charge. `dark` always
/// reflects what the page currently renders, whatever the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// Whether the dark variant is currently applied to the page.
    pub dark: bool,
    /// Explicit stored choice, if any.
    pub preference: Option<ColorScheme>,
}

impl ThemeState {
    /// The scheme the page currently renders.
    pub fn applied_scheme(self) -> ColorScheme {
        if self.dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Display label for the preference source.
    pub fn preference_label(self) -> &'static str {
        match self.preference {
            None => "System",
            Some(ColorScheme::Light) => "Light",
            Some(ColorScheme::Dark) => "Dark",
        }
    }
}

//! Terminal color theme.
//!
//! The chrome colors follow the configured [`ThemeMode`]; the accent is
//! replaced by the primary theme token of the current base color so the
//! interface takes on the palette being edited.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors for the TUI chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Selection and key hints
    pub accent: Color,
    /// Confirmation messages
    pub success: Color,
    /// Error messages
    pub error: Color,
    /// Body text
    pub text: Color,
    /// Labels
    pub text_secondary: Color,
    /// Help text and placeholders
    pub text_muted: Color,
    /// Screen background
    pub background: Color,
}

impl Theme {
    /// Picks dark or light from the OS setting, dark when it cannot be read.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark terminal background.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Light terminal background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,
            background: Color::White,
        }
    }

    /// Returns the theme with `accent` as its accent color.
    #[must_use]
    pub const fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

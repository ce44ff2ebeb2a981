//! Color palettes for HeartCare.
//!
//! Two palettes (light and dark) that integrate with Iced's theme system via
//! the `Palette` type. The risk colors match the gauge gradients so that the
//! success/warning/danger roles read the same everywhere in the app.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes, in toggle order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// The mode after this one in toggle order.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given theme mode.
pub fn heart_palette(theme_mode: ThemeMode, system_is_dark: bool) -> Palette {
    if theme_mode.is_dark(system_is_dark) {
        dark()
    } else {
        light()
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.98, 0.99),
        text: Color::from_rgb(0.12, 0.16, 0.22),
        primary: Color::from_rgb8(0x66, 0x7e, 0xea), // Indigo
        success: Color::from_rgb8(0x10, 0xb9, 0x81), // Low risk
        warning: Color::from_rgb8(0xf5, 0x9e, 0x0b), // Medium risk
        danger: Color::from_rgb8(0xef, 0x44, 0x44),  // High risk
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.07, 0.08, 0.11),
        text: Color::from_rgb(0.93, 0.94, 0.96),
        primary: Color::from_rgb8(0x81, 0x96, 0xf0),
        success: Color::from_rgb8(0x34, 0xd3, 0x99),
        warning: Color::from_rgb8(0xfb, 0xbf, 0x24),
        danger: Color::from_rgb8(0xf8, 0x71, 0x71),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_follows_os() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
    }

    #[test]
    fn test_next_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        for expected in [ThemeMode::Dark, ThemeMode::System, ThemeMode::Light] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }
}

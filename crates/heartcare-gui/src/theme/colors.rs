//! App-specific colors on top of Iced's `ExtendedPalette`.
//!
//! ```rust,ignore
//! use crate::theme::ClinicalColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.clinical().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use heartcare_model::{Rgb, SeverityTone};
use iced::{Color, Theme};

/// Colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalColorSet {
    // === Severity badges ===
    pub severity_high: Color,
    pub severity_high_light: Color,
    pub severity_medium: Color,
    pub severity_medium_light: Color,
    pub severity_low: Color,
    pub severity_low_light: Color,
    pub severity_neutral: Color,
    pub severity_neutral_light: Color,

    // === Accent tints ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_primary_light: Color,
    pub accent_secondary: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,
    pub border_error: Color,

    // === Backgrounds ===
    pub background_elevated: Color,

    // === Text ===
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_accent: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    pub backdrop: Color,
}

impl ClinicalColorSet {
    /// Foreground and background of a severity badge.
    pub fn severity(&self, tone: SeverityTone) -> (Color, Color) {
        match tone {
            SeverityTone::High => (self.severity_high, self.severity_high_light),
            SeverityTone::Medium => (self.severity_medium, self.severity_medium_light),
            SeverityTone::Low => (self.severity_low, self.severity_low_light),
            SeverityTone::Neutral => (self.severity_neutral, self.severity_neutral_light),
        }
    }
}

/// Extension trait for app-specific colors.
pub trait ClinicalColors {
    fn clinical(&self) -> ClinicalColorSet;
}

impl ClinicalColors for Theme {
    fn clinical(&self) -> ClinicalColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;

        let tint = |color: Color| {
            if is_dark {
                Color { a: 0.18, ..color }
            } else {
                blend_color(color, Color::WHITE, 0.85)
            }
        };

        let neutral = if is_dark {
            Color::from_rgb(0.62, 0.64, 0.70)
        } else {
            Color::from_rgb(0.42, 0.45, 0.50)
        };

        ClinicalColorSet {
            severity_high: palette.danger.base.color,
            severity_high_light: tint(palette.danger.base.color),
            severity_medium: palette.warning.base.color,
            severity_medium_light: tint(palette.warning.base.color),
            severity_low: palette.success.base.color,
            severity_low_light: tint(palette.success.base.color),
            severity_neutral: neutral,
            severity_neutral_light: tint(neutral),

            accent_hover: if is_dark {
                blend_color(palette.primary.base.color, Color::WHITE, 0.12)
            } else {
                blend_color(palette.primary.base.color, Color::BLACK, 0.10)
            },
            accent_pressed: blend_color(palette.primary.base.color, Color::BLACK, 0.20),
            accent_primary_light: tint(palette.primary.base.color),
            accent_secondary: Color::from_rgb8(0x76, 0x4b, 0xa2),

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.18, 0.19, 0.23)
            } else {
                Color::from_rgb(0.89, 0.91, 0.94)
            },
            border_focused: palette.primary.base.color,
            border_error: palette.danger.base.color,

            background_elevated: if is_dark {
                Color::from_rgb(0.12, 0.13, 0.17)
            } else {
                Color::WHITE
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.78, 0.80, 0.85)
            } else {
                Color::from_rgb(0.29, 0.33, 0.39)
            },
            text_muted: neutral,
            text_on_accent: Color::WHITE,

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.35 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.5 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        }
    }
}

/// Linear blend of two colors; `amount` 0.0 keeps `base`, 1.0 yields `target`.
pub fn blend_color(base: Color, target: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    Color {
        r: base.r + (target.r - base.r) * amount,
        g: base.g + (target.g - base.g) * amount,
        b: base.b + (target.b - base.b) * amount,
        a: base.a + (target.a - base.a) * amount,
    }
}

/// Converts a model color into an Iced color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.2, 0.4, 0.6);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(blend_color(base, Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_severity_tones_differ() {
        let colors = Theme::Light.clinical();
        let (high, _) = colors.severity(SeverityTone::High);
        let (low, _) = colors.severity(SeverityTone::Low);
        let (neutral, _) = colors.severity(SeverityTone::Neutral);
        assert_ne!(high, low);
        assert_ne!(high, neutral);
    }

    #[test]
    fn test_model_colors_convert() {
        let color = to_color(Rgb::new(0xff, 0x00, 0x00));
        assert_eq!(color, Color::from_rgb(1.0, 0.0, 0.0));
    }
}

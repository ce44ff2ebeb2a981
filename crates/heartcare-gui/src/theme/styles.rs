//! Theme creation and widget style functions.
//!
//! Style functions receive `&Theme` and read colors from it:
//!
//! ```rust,ignore
//! button(text("Predict")).style(button_primary)
//! container(card).style(container_card)
//! ```

use iced::gradient::Linear;
use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme, Vector};

use super::colors::{ClinicalColors, to_color};
use super::palette::{ThemeMode, heart_palette};
use super::spacing;
use heartcare_model::GaugeGradient;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the HeartCare theme for the given mode.
pub fn heart_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let palette = heart_palette(theme_mode, system_is_dark);
    let name = if theme_mode.is_dark(system_is_dark) {
        "HeartCare Dark"
    } else {
        "HeartCare Light"
    };
    Theme::custom(name.to_string(), palette)
}

/// Background for a gauge gradient.
pub fn gradient_background(gradient: &GaugeGradient) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Degrees(gradient.angle_degrees))
            .add_stop(0.0, to_color(gradient.from))
            .add_stop(1.0, to_color(gradient.to)),
    ))
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let clinical = theme.clinical();

    let (background, shadow) = match status {
        button::Status::Active => (palette.primary.base.color, clinical.shadow),
        button::Status::Hovered => (clinical.accent_hover, clinical.shadow_strong),
        button::Status::Pressed => (clinical.accent_pressed, Color::TRANSPARENT),
        button::Status::Disabled => (palette.primary.weak.color, Color::TRANSPARENT),
    };

    button::Style {
        background: Some(background.into()),
        text_color: clinical.text_on_accent,
        border: rounded(spacing::BORDER_RADIUS_MD),
        shadow: Shadow {
            color: shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - outlined alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let clinical = theme.clinical();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => clinical.accent_primary_light,
        _ => clinical.background_elevated,
    };
    let text_color = match status {
        button::Status::Disabled => clinical.text_muted,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.primary.base.color,
        },
        ..Default::default()
    }
}

/// Ghost button style - icon buttons and low-emphasis actions.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let clinical = theme.clinical();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(clinical.accent_primary_light.into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: clinical.text_secondary,
        border: rounded(spacing::BORDER_RADIUS_SM),
        ..Default::default()
    }
}

/// Navigation link style; `active` marks the current page.
pub fn button_nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let clinical = theme.clinical();

        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette.primary.base.color
        } else {
            clinical.text_secondary
        };

        button::Style {
            background: active.then(|| clinical.accent_primary_light.into()),
            text_color,
            border: rounded(spacing::BORDER_RADIUS_SM),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    card_with_opacity(theme, 1.0)
}

/// Card style faded to `opacity`, used while a card is revealed.
pub fn card_with_opacity(theme: &Theme, opacity: f32) -> container::Style {
    let clinical = theme.clinical();

    container::Style {
        background: Some(clinical.background_elevated.scale_alpha(opacity).into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: clinical.border_subtle.scale_alpha(opacity),
        },
        shadow: Shadow {
            color: clinical.shadow.scale_alpha(opacity),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        text_color: Some(
            theme
                .extended_palette()
                .background
                .base
                .text
                .scale_alpha(opacity),
        ),
        ..Default::default()
    }
}

/// Navigation bar style.
pub fn container_nav(theme: &Theme) -> container::Style {
    let clinical = theme.clinical();

    container::Style {
        background: Some(clinical.background_elevated.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: clinical.border_subtle,
        },
        shadow: Shadow {
            color: clinical.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Hero banner style - brand gradient.
pub fn container_hero(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let clinical = theme.clinical();

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(135.0))
                .add_stop(0.0, palette.primary.base.color)
                .add_stop(1.0, clinical.accent_secondary),
        ))),
        text_color: Some(clinical.text_on_accent),
        ..Default::default()
    }
}

/// Modal dialog style.
pub fn container_modal(theme: &Theme) -> container::Style {
    let clinical = theme.clinical();

    container::Style {
        background: Some(clinical.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: clinical.border_default,
        },
        shadow: Shadow {
            color: clinical.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Semi-transparent layer behind modals and the loading overlay.
pub fn container_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.clinical().backdrop.into()),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    text_input_with_border(theme, status, false)
}

/// Text input style for a required field left empty.
pub fn text_input_missing(theme: &Theme, status: text_input::Status) -> text_input::Style {
    text_input_with_border(theme, status, true)
}

fn text_input_with_border(
    theme: &Theme,
    status: text_input::Status,
    missing: bool,
) -> text_input::Style {
    let palette = theme.extended_palette();
    let clinical = theme.clinical();

    let (width, color) = match status {
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, clinical.border_focused)
        }
        _ if missing => (spacing::BORDER_WIDTH_MEDIUM, clinical.border_error),
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, clinical.text_muted),
        _ => (spacing::BORDER_WIDTH_THIN, clinical.border_default),
    };

    text_input::Style {
        background: clinical.background_elevated.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width,
            color,
        },
        icon: clinical.text_muted,
        placeholder: clinical.text_muted,
        value: palette.background.base.text,
        selection: clinical.accent_primary_light,
    }
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Secondary copy: subtitles, captions, axis labels.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.clinical().text_muted),
    }
}

/// Inline validation messages.
pub fn text_danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

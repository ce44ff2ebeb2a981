//! Theme module for HeartCare.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - App-specific colors via the `ClinicalColors` extension trait (`colors`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{ClinicalColors, blend_color, to_color};
pub use palette::ThemeMode;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, CONTENT_MAX_WIDTH, GAUGE_SIZE,
    ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS,
};
pub use styles::{
    button_ghost, button_nav_link, button_primary, button_secondary, card_with_opacity,
    container_backdrop, container_card, container_hero, container_modal, container_nav,
    gradient_background, heart_theme, text_danger, text_input_default, text_input_missing,
    text_muted,
};

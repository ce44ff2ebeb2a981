//! Icon helper components using iced_fonts with Lucide icons.
//!
//! ```rust,ignore
//! use crate::component::icon::{icon_house, icon_check};
//!
//! row![icon_house(), text("Home")]
//! ```
//!
//! See <https://lucide.dev/icons/> for the full icon catalog.

use iced::widget::Text;

// Re-export the Lucide font bytes for loading in main.rs
pub use iced_fonts::LUCIDE_FONT_BYTES;

// =============================================================================
// NAVIGATION
// =============================================================================

pub fn icon_house() -> Text<'static> {
    iced_fonts::lucide::house()
}

/// Dashboard link.
pub fn icon_layers() -> Text<'static> {
    iced_fonts::lucide::layers()
}

/// Risk assessment link.
pub fn icon_clipboard_check() -> Text<'static> {
    iced_fonts::lucide::clipboard_check()
}

pub fn icon_menu() -> Text<'static> {
    iced_fonts::lucide::menu()
}

pub fn icon_close() -> Text<'static> {
    iced_fonts::lucide::x()
}

pub fn icon_arrow_right() -> Text<'static> {
    iced_fonts::lucide::arrow_right()
}

// =============================================================================
// STATUS & FEEDBACK
// =============================================================================

pub fn icon_loader() -> Text<'static> {
    iced_fonts::lucide::loader()
}

pub fn icon_warning() -> Text<'static> {
    iced_fonts::lucide::triangle_alert()
}

pub fn icon_check() -> Text<'static> {
    iced_fonts::lucide::check()
}

// =============================================================================
// ACTIONS
// =============================================================================

pub fn icon_refresh() -> Text<'static> {
    iced_fonts::lucide::refresh_cw()
}

/// Theme toggle.
pub fn icon_eye() -> Text<'static> {
    iced_fonts::lucide::eye()
}

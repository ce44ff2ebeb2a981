//! Message module for HeartCare.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod chrome;
pub mod dashboard;
pub mod predict;

pub use chrome::ChromeMessage;
pub use dashboard::DashboardMessage;
pub use predict::PredictMessage;

use crate::state::Page;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Switch to another page; the page is reloaded.
    Navigate(Page),

    // =========================================================================
    // Page modules
    // =========================================================================
    /// Statistics loader on the dashboard page
    Dashboard(DashboardMessage),

    /// Assessment form and results
    Predict(PredictMessage),

    /// Navigation bar, anchor scrolling, reveal-on-scroll
    Chrome(ChromeMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Cycle light, dark and system theme
    ToggleTheme,

    /// OS appearance changed
    SystemThemeChanged(iced::theme::Mode),
}

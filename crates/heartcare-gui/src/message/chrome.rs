//! Page chrome messages.

use std::time::Instant;

use iced::Size;
use iced::widget::scrollable::Viewport;

use crate::state::ScrollMetrics;

#[derive(Debug, Clone)]
pub enum ChromeMessage {
    /// A link was activated. `#id` links scroll within the page, paths
    /// switch pages.
    LinkClicked(&'static str),

    /// The compact navigation toggle was pressed.
    ToggleNav,

    /// The page scrollable moved.
    Scrolled(ScrollMetrics),

    WindowResized(Size),

    /// Animation frame.
    Frame(Instant),
}

impl ChromeMessage {
    /// Maps a scrollable viewport to a `Scrolled` message.
    pub fn scrolled(viewport: Viewport) -> Self {
        Self::Scrolled(ScrollMetrics {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
    }
}

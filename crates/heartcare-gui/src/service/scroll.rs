//! Scroll operations on the page scrollable.

use iced::Task;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{Id, operation};

pub const PAGE_SCROLL_ID: &str = "page";

pub fn page_scroll_id() -> Id {
    Id::new(PAGE_SCROLL_ID)
}

/// Moves the page to content offset `y`.
pub fn scroll_page_to<T>(y: f32) -> Task<T> {
    operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y })
}

/// Jumps to the top without animation (page switches).
pub fn snap_page_to_top<T>() -> Task<T> {
    operation::snap_to(page_scroll_id(), RelativeOffset::START)
}

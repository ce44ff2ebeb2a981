//! View module for HeartCare.
//!
//! Views are pure functions that render UI based on application state. Page
//! sections are sized from the constants in [`crate::state::layout`], which
//! is what lets anchors and reveal tracking work without measuring widgets.
//!
//! - `nav.rs` - navigation bar and compact menu
//! - `home.rs` - landing page
//! - `dashboard.rs` - statistics and charts
//! - `predict.rs` - assessment form
//! - `results.rs` - results panel

pub mod dashboard;
pub mod home;
pub mod nav;
pub mod predict;
pub mod results;

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::layout::{CARD_GAP, SECTION_HEADER_HEIGHT, SECTION_PADDING};
use crate::state::{AppState, Page};
use crate::theme::{CONTENT_MAX_WIDTH, SPACING_SM, SPACING_XL, text_muted};

pub use dashboard::view_dashboard;
pub use home::view_home;
pub use nav::view_nav;
pub use predict::view_predict;

/// Render the current page body (everything below the navigation bar).
pub fn view_page(state: &AppState) -> Element<'_, Message> {
    let page = match state.page {
        Page::Home => view_home(state),
        Page::Dashboard => view_dashboard(state),
        Page::Predict => view_predict(state),
    };
    container(page).center_x(Length::Fill).into()
}

/// A padded, fixed-height page section with a centered header.
fn section<'a>(
    title: &'a str,
    subtitle: String,
    body: Element<'a, Message>,
    height: f32,
) -> Element<'a, Message> {
    let header = column![text(title).size(28), text(subtitle).size(15).style(text_muted)]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center);

    let content = column![
        container(header)
            .center_x(Length::Fill)
            .height(Length::Fixed(SECTION_HEADER_HEIGHT)),
        body,
    ]
    .max_width(CONTENT_MAX_WIDTH);

    container(content)
        .padding([SECTION_PADDING, SPACING_XL])
        .center_x(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

/// Lays cards out `columns` per row. A short last row keeps card widths.
fn card_grid(cards: Vec<Element<'_, Message>>, columns: usize) -> Element<'_, Message> {
    let mut grid = column![].spacing(CARD_GAP);
    let mut cards = cards.into_iter().peekable();

    while cards.peek().is_some() {
        let mut line = row![].spacing(CARD_GAP);
        for _ in 0..columns {
            line = line.push(
                cards
                    .next()
                    .unwrap_or_else(|| Space::new().width(Length::Fill).into()),
            );
        }
        grid = grid.push(line);
    }

    grid.into()
}

//! Cards that fade in when scrolled into view.

use iced::widget::{column, container};
use iced::{Element, Length, Padding, Theme};

use crate::state::REVEAL_TRANSITION;
use crate::theme::{SPACING_LG, card_with_opacity};

/// A fixed-height card drawn at `progress` through its reveal transition.
///
/// Hidden cards still take their space so the page does not jump.
pub fn reveal_card<'a, M: 'a>(content: Element<'a, M>, height: f32, progress: f32) -> Element<'a, M> {
    let (opacity, shift) = REVEAL_TRANSITION.frame(progress);

    if opacity <= 0.0 {
        return container(column![])
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into();
    }

    let card = container(content)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |theme: &Theme| card_with_opacity(theme, opacity));

    container(card)
        .padding(Padding {
            top: shift,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

//! Modal overlays: the alert dialog and the loading overlay.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Element, Length, Theme};

use super::icon::{icon_close, icon_loader, icon_warning};
use crate::theme::{
    ClinicalColors, ICON_SIZE_LG, ICON_SIZE_MD, MODAL_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    button_ghost, button_primary, container_backdrop, container_modal,
};

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a semi-transparent
/// backdrop. Clicking the backdrop does NOT close the modal - use the close button.
pub fn modal<'a, M: Clone + 'static>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_backdrop);

    let header = row![
        text(title).size(18),
        space::horizontal(),
        button(
            container(icon_close().size(ICON_SIZE_MD)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.clinical().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH))
    .padding(SPACING_LG)
    .style(container_modal);

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates an alert modal with a single OK button.
pub fn alert_modal<'a, M: Clone + 'static>(
    base: Element<'a, M>,
    title: &'a str,
    message: &'a str,
    on_close: M,
) -> Element<'a, M> {
    let content = row![
        container(icon_warning().size(ICON_SIZE_LG)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.extended_palette().danger.base.color),
            ..Default::default()
        }),
        text(message),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into();

    let ok: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(base, title, content, on_close, vec![ok])
}

/// Covers `base` with a backdrop and a spinner while a request is in flight.
///
/// The backdrop is opaque to input, so the form cannot be edited meanwhile.
pub fn loading_overlay<'a, M: 'static>(base: Element<'a, M>, label: &'a str) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_backdrop);

    let panel = container(
        column![icon_loader().size(ICON_SIZE_LG), text(label)]
            .spacing(SPACING_MD)
            .align_x(Alignment::Center),
    )
    .padding(SPACING_LG)
    .style(container_modal);

    stack![base, opaque(backdrop), center(panel)].into()
}

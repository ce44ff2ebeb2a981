//! Navigation bar.
//!
//! At full width the page links sit in the bar. Below the compact
//! breakpoint a toggle replaces them and opens the links as a drop-down.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::component::icon::{
    icon_clipboard_check, icon_close, icon_eye, icon_house, icon_layers, icon_menu,
};
use crate::message::{ChromeMessage, Message};
use crate::state::layout::NAV_HEIGHT;
use crate::state::{AppState, Page};
use crate::theme::{
    ICON_SIZE_MD, ICON_SIZE_SM, SPACING_LG, SPACING_SM, SPACING_XS, button_ghost, button_nav_link,
    container_nav,
};

pub fn view_nav(state: &AppState) -> Element<'_, Message> {
    let chrome = &state.chrome;

    let brand = button(text("HeartCare").size(22))
        .on_press(Message::Chrome(ChromeMessage::LinkClicked(Page::Home.path())))
        .padding([SPACING_XS, SPACING_SM])
        .style(button_ghost);

    let theme_toggle = button(
        row![
            icon_eye().size(ICON_SIZE_SM),
            text(state.settings.display.theme_mode.label()).size(13),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleTheme)
    .padding([SPACING_XS, SPACING_SM])
    .style(button_ghost);

    let mut bar = row![brand, Space::new().width(Length::Fill)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    if chrome.has_toggle() {
        let icon = if chrome.nav_open() {
            icon_close()
        } else {
            icon_menu()
        };
        bar = bar.push(theme_toggle).push(
            button(icon.size(ICON_SIZE_MD))
                .on_press(Message::Chrome(ChromeMessage::ToggleNav))
                .padding([SPACING_XS, SPACING_SM])
                .style(button_ghost),
        );
    } else {
        for page in Page::ALL {
            bar = bar.push(nav_link(page, state.page));
        }
        bar = bar.push(theme_toggle);
    }

    let bar = container(bar)
        .padding([0.0, SPACING_LG])
        .center_y(Length::Fixed(NAV_HEIGHT))
        .width(Length::Fill);

    if chrome.has_toggle() && chrome.menu_visible() {
        let mut menu = column![].spacing(SPACING_XS).padding([SPACING_SM, SPACING_LG]);
        for page in Page::ALL {
            menu = menu.push(nav_link(page, state.page));
        }
        container(column![bar, menu])
            .width(Length::Fill)
            .style(container_nav)
            .into()
    } else {
        container(bar)
            .width(Length::Fill)
            .style(container_nav)
            .into()
    }
}

fn nav_link<'a>(page: Page, current: Page) -> Element<'a, Message> {
    let icon = match page {
        Page::Home => icon_house(),
        Page::Dashboard => icon_layers(),
        Page::Predict => icon_clipboard_check(),
    };

    button(
        row![icon.size(ICON_SIZE_SM), text(page.label()).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Chrome(ChromeMessage::LinkClicked(page.path())))
    .padding([SPACING_XS, SPACING_SM])
    .style(button_nav_link(page == current))
    .into()
}

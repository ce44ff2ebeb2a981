//! Navigation bar, anchor links, scrolling and reveal.

use std::time::Instant;

use iced::Task;

use super::{MessageHandler, enter_page};
use crate::message::{ChromeMessage, Message};
use crate::service::scroll_page_to;
use crate::state::{AppState, LinkTarget};

pub struct ChromeHandler;

impl ChromeHandler {
    /// Starts a smooth scroll to `id`; a no-op when the page has no such
    /// section. Frames drive the scroll from here on.
    pub fn scroll_to_anchor(state: &mut AppState, id: &str) -> Task<Message> {
        state.chrome.start_scroll_to_anchor(id, Instant::now());
        Task::none()
    }
}

impl MessageHandler<ChromeMessage> for ChromeHandler {
    fn handle(&self, state: &mut AppState, msg: ChromeMessage) -> Task<Message> {
        match msg {
            ChromeMessage::LinkClicked(href) => match LinkTarget::parse(href) {
                Some(LinkTarget::Anchor(id)) => {
                    state.chrome.close_nav();
                    Self::scroll_to_anchor(state, id)
                }
                Some(LinkTarget::Page(page)) => enter_page(state, page),
                None => {
                    tracing::warn!(href, "link goes nowhere");
                    Task::none()
                }
            },

            ChromeMessage::ToggleNav => {
                if !state.chrome.toggle_nav() {
                    tracing::trace!("navigation toggle ignored at full width");
                }
                Task::none()
            }

            ChromeMessage::Scrolled(metrics) => {
                state.chrome.scrolled(metrics, Instant::now());
                Task::none()
            }

            ChromeMessage::WindowResized(size) => {
                state.chrome.resize(size);
                Task::none()
            }

            ChromeMessage::Frame(now) => match state.chrome.tick(now) {
                Some(offset) => scroll_page_to(offset),
                None => Task::none(),
            },
        }
    }
}

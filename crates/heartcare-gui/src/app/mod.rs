//! Main application module for HeartCare.
//!
//! The application follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in `update()`; views are pure functions of
//! [`AppState`]. Backend calls run through `Task::perform` and come back as
//! messages.

mod subscription;

use iced::widget::{column, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::component::{alert_modal, loading_overlay};
use crate::handler::{
    ChromeHandler, DashboardHandler, MessageHandler, PredictHandler, enter_page,
};
use crate::message::{ChromeMessage, Message, PredictMessage};
use crate::service::page_scroll_id;
use crate::state::{AppState, Page, Settings};
use crate::theme::heart_theme;
use crate::view::{view_nav, view_page};

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and run the landing page's ready work.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut app = Self {
            state: AppState::with_settings(settings),
        };
        let startup = enter_page(&mut app.state, Page::Home);
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(page) => enter_page(&mut self.state, page),

            // =================================================================
            // Page modules
            // =================================================================
            Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),

            Message::Predict(msg) => PredictHandler.handle(&mut self.state, msg),

            Message::Chrome(msg) => ChromeHandler.handle(&mut self.state, msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::ToggleTheme => {
                let mode = self.state.settings.display.cycle_theme();
                tracing::info!(mode = mode.label(), "theme changed");
                if let Err(e) = self.state.settings.save() {
                    tracing::warn!(error = %e, "failed to save settings");
                }
                Task::none()
            }

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }
        }
    }

    /// Render the window: navigation bar over the scrolling page, with the
    /// loading overlay or error alert on top when active.
    pub fn view(&self) -> Element<'_, Message> {
        let page = scrollable(view_page(&self.state))
            .id(page_scroll_id())
            .on_scroll(|viewport| Message::Chrome(ChromeMessage::scrolled(viewport)))
            .width(Length::Fill)
            .height(Length::Fill);

        let base: Element<'_, Message> = column![view_nav(&self.state), page].into();

        let prediction = &self.state.prediction;
        if let Some(message) = prediction.alert() {
            alert_modal(
                base,
                "Prediction failed",
                message,
                Message::Predict(PredictMessage::DismissAlert),
            )
        } else if prediction.is_loading() {
            loading_overlay(base, "Analyzing patient data...")
        } else {
            base
        }
    }

    pub fn title(&self) -> String {
        format!("HeartCare - {}", self.state.page.label())
    }

    pub fn theme(&self) -> Theme {
        heart_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

//! Root application state.

use std::time::Instant;

use heartcare_client::{ApiClient, ApiError};
use iced::Size;

use crate::error::GuiError;

use super::chrome::{ChromeState, DEFAULT_WINDOW_SIZE};
use super::dashboard::DashboardState;
use super::page::Page;
use super::prediction::PredictionState;
use super::settings::Settings;

/// Root application state.
///
/// Each page module owns one slice: `dashboard` for the statistics loader,
/// `prediction` for the assessment flow, `chrome` for navigation and
/// scrolling. The slices never read each other.
pub struct AppState {
    pub page: Page,
    pub settings: Settings,
    /// Backend client, or why it could not be built.
    pub api: Result<ApiClient, ApiError>,
    pub dashboard: DashboardState,
    pub prediction: PredictionState,
    pub chrome: ChromeState,
    /// Whether the OS is in dark mode (for `ThemeMode::System`).
    pub system_is_dark: bool,
}

impl AppState {
    /// Builds state from persisted settings and the environment.
    pub fn with_settings(settings: Settings) -> Self {
        let config = match settings.api.clone().apply_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring environment overrides");
                settings.api.clone()
            }
        };

        let api = ApiClient::new(&config);
        match &api {
            Ok(client) => tracing::info!(base_url = %client.base_url(), "backend configured"),
            Err(e) => {
                let error = GuiError::from(e.clone());
                tracing::error!(%error, hint = error.suggestion(), "backend client unavailable");
            }
        }

        Self::new(settings, api, DEFAULT_WINDOW_SIZE)
    }

    /// Builds state around an already configured client.
    pub fn new(settings: Settings, api: Result<ApiClient, ApiError>, window: Size) -> Self {
        let page = Page::default();
        Self {
            page,
            settings,
            api,
            dashboard: DashboardState::default(),
            prediction: PredictionState::default(),
            chrome: ChromeState::new(page, window, Instant::now()),
            system_is_dark: false,
        }
    }
}

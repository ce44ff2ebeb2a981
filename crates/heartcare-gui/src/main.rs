//! HeartCare - Desktop GUI Application
//!
//! A desktop client for heart attack risk assessment: patient data goes to
//! the prediction backend, results come back with an explanation, risk
//! factors and recommendations.

use heartcare_gui::app::App;
use heartcare_gui::component::icon::LUCIDE_FONT_BYTES;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting HeartCare");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(480.0, 600.0)),
            ..Default::default()
        })
        .run()
}

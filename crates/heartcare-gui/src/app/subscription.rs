//! Application subscriptions.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Frames | Scroll or reveal animating | Drive smooth scroll and fade-ins |
//! | Window resize | Always | Compact navigation breakpoint |
//! | System theme | Always | Track OS theme for `ThemeMode::System` |

use iced::{Subscription, system, window};

use crate::message::{ChromeMessage, Message};
use crate::state::AppState;

/// Batch every subscription the current state needs.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        frame_subscription(state),
        resize_subscription(),
        system::theme_changes().map(Message::SystemThemeChanged),
    ])
}

/// Animation frames, only while something is moving.
fn frame_subscription(state: &AppState) -> Subscription<Message> {
    if state.chrome.is_animating() {
        window::frames().map(|now| Message::Chrome(ChromeMessage::Frame(now)))
    } else {
        Subscription::none()
    }
}

fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::Chrome(ChromeMessage::WindowResized(size)))
}

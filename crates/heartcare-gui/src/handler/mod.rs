//! Message handler architecture.
//!
//! Each page module gets a handler implementing [`MessageHandler`] for its
//! own message type. `App::update()` dispatches to them:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),
//!         Message::Predict(msg) => PredictHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod chrome;
mod dashboard;
mod predict;

use std::time::Instant;

use iced::Task;

use crate::message::Message;
use crate::service::snap_page_to_top;
use crate::state::{AppState, Page};

pub use chrome::ChromeHandler;
pub use dashboard::DashboardHandler;
pub use predict::PredictHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for a specific message type and can access
/// the full application state.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

/// Switches to `page` and runs its page-ready work.
///
/// Every entry is a fresh load: chrome and reveal state start over, the
/// assessment form is cleared, and the dashboard fetches again.
pub fn enter_page(state: &mut AppState, page: Page) -> Task<Message> {
    tracing::debug!(page = page.path(), "entering page");
    state.page = page;
    state.chrome.enter_page(page, Instant::now());

    let ready = match page {
        Page::Home => Task::none(),
        Page::Dashboard => DashboardHandler::start_load(state),
        Page::Predict => {
            state.prediction.reload();
            Task::none()
        }
    };

    Task::batch([snap_page_to_top(), ready])
}

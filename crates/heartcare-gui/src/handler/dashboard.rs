//! Statistics loader for the dashboard page.

use iced::Task;

use super::MessageHandler;
use crate::message::{DashboardMessage, Message};
use crate::service::{fetch_feature_importance, fetch_statistics};
use crate::state::AppState;

pub struct DashboardHandler;

impl DashboardHandler {
    /// Starts a load: statistics first, importance once they are in.
    pub fn start_load(state: &mut AppState) -> Task<Message> {
        let generation = state.dashboard.begin_load();
        tracing::debug!(generation, "loading dashboard");
        Task::perform(fetch_statistics(state.api.clone()), move |result| {
            Message::Dashboard(DashboardMessage::StatisticsLoaded { generation, result })
        })
    }
}

impl MessageHandler<DashboardMessage> for DashboardHandler {
    fn handle(&self, state: &mut AppState, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::StatisticsLoaded { generation, result } => {
                if !state.dashboard.apply_statistics(generation, result) {
                    return Task::none();
                }
                Task::perform(fetch_feature_importance(state.api.clone()), move |result| {
                    Message::Dashboard(DashboardMessage::ImportanceLoaded { generation, result })
                })
            }

            DashboardMessage::ImportanceLoaded { generation, result } => {
                state.dashboard.apply_importance(generation, result);
                Task::none()
            }

            DashboardMessage::Refresh => Self::start_load(state),
        }
    }
}

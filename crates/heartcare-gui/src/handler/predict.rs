//! Assessment form and results panel.

use heartcare_model::PatientField;
use iced::Task;

use super::{ChromeHandler, MessageHandler};
use crate::message::{Message, PredictMessage};
use crate::service::submit_prediction;
use crate::state::layout::{ANCHOR_RESULTS, ANCHOR_TOP};
use crate::state::{AppState, Completion};

pub struct PredictHandler;

impl MessageHandler<PredictMessage> for PredictHandler {
    fn handle(&self, state: &mut AppState, msg: PredictMessage) -> Task<Message> {
        match msg {
            PredictMessage::FieldChanged(field, value) => {
                state.prediction.set_field(field, value);
                Task::none()
            }

            PredictMessage::Submit => match state.prediction.begin_submit() {
                Err(missing) => {
                    let ids: Vec<&str> = missing.iter().map(PatientField::id).collect();
                    tracing::info!(missing = ?ids, "assessment incomplete, not submitted");
                    Task::none()
                }
                Ok(submission) => {
                    let request = submission.id;
                    tracing::debug!(%request, "submitting assessment");
                    Task::perform(
                        submit_prediction(state.api.clone(), submission.input),
                        move |result| {
                            Message::Predict(PredictMessage::Completed {
                                request,
                                result: Box::new(result),
                            })
                        },
                    )
                }
            },

            PredictMessage::Completed { request, result } => {
                match state.prediction.complete(request, *result) {
                    Completion::Shown => {
                        state.chrome.invalidate_content_height();
                        ChromeHandler::scroll_to_anchor(state, ANCHOR_RESULTS)
                    }
                    Completion::Failed | Completion::Stale => Task::none(),
                }
            }

            PredictMessage::CloseResults => {
                state.prediction.close_results();
                Task::none()
            }

            PredictMessage::NewAssessment => {
                state.prediction.new_assessment();
                ChromeHandler::scroll_to_anchor(state, ANCHOR_TOP)
            }

            PredictMessage::Reset => {
                state.prediction.reset();
                Task::none()
            }

            PredictMessage::DismissAlert => {
                state.prediction.dismiss_alert();
                Task::none()
            }
        }
    }
}

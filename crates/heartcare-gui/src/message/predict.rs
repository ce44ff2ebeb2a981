//! Assessment page messages.

use heartcare_client::ApiError;
use heartcare_model::{PatientField, PredictionResult};

use crate::state::RequestId;

#[derive(Debug, Clone)]
pub enum PredictMessage {
    /// A form field was edited (text entry or choice list).
    FieldChanged(PatientField, String),

    /// Submit the form.
    Submit,

    /// `POST /api/predict` finished for `request`.
    Completed {
        request: RequestId,
        result: Box<Result<PredictionResult, ApiError>>,
    },

    /// Hide the results panel.
    CloseResults,

    /// Hide the results, clear the form and scroll to the top.
    NewAssessment,

    /// Clear the form and hide the results.
    Reset,

    /// Acknowledge the error alert.
    DismissAlert,
}

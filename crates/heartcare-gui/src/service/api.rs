//! Backend calls for `Task::perform`.
//!
//! Each function takes the client by value (cloning it is cheap) so the
//! future is `'static`. A client that failed to build surfaces as the same
//! error on every call.

use heartcare_client::{ApiClient, ApiError};
use heartcare_model::{FeatureImportance, PatientInput, PredictionResult, StatisticsSummary};

pub async fn fetch_statistics(
    api: Result<ApiClient, ApiError>,
) -> Result<StatisticsSummary, ApiError> {
    api?.statistics().await
}

pub async fn fetch_feature_importance(
    api: Result<ApiClient, ApiError>,
) -> Result<FeatureImportance, ApiError> {
    api?.feature_importance().await
}

pub async fn submit_prediction(
    api: Result<ApiClient, ApiError>,
    input: PatientInput,
) -> Result<PredictionResult, ApiError> {
    api?.predict(&input).await
}

//! Dashboard page messages.

use heartcare_client::ApiError;
use heartcare_model::{FeatureImportance, StatisticsSummary};

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    /// `GET /api/statistics` finished for load `generation`.
    StatisticsLoaded {
        generation: u64,
        result: Result<StatisticsSummary, ApiError>,
    },

    /// `GET /api/feature-importance` finished for load `generation`.
    ImportanceLoaded {
        generation: u64,
        result: Result<FeatureImportance, ApiError>,
    },

    /// Reload statistics and charts.
    Refresh,
}

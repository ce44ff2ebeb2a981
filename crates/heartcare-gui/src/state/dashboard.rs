//! Dashboard page state: the statistics cards and the six charts.
//!
//! A load runs statistics first, then feature importance, then builds the
//! charts. Each load is stamped with a generation so that results arriving
//! after the user navigated away and back are ignored.

use heartcare_client::ApiError;
use heartcare_model::{
    ChartSpec, DataSource, FeatureImportance, StatDisplay, StatisticsSummary, dashboard_charts,
};

/// Text shown in a stat card before statistics have loaded.
pub const STAT_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Statistics,
    Importance,
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    stats: Option<StatisticsSummary>,
    importance_source: Option<DataSource>,
    charts: Vec<ChartSpec>,
    phase: LoadPhase,
    generation: u64,
}

impl DashboardState {
    /// Starts a new load and returns its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Statistics;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Records the statistics response. Returns `true` when the load should
    /// continue with feature importance.
    pub fn apply_statistics(
        &mut self,
        generation: u64,
        result: Result<StatisticsSummary, ApiError>,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, "dropping statistics from a superseded load");
            return false;
        }

        match result {
            Ok(stats) => {
                tracing::info!(total = stats.total_predictions, "statistics loaded");
                self.stats = Some(stats);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load statistics");
            }
        }
        self.phase = LoadPhase::Importance;
        true
    }

    /// Records the feature-importance response and builds the charts.
    ///
    /// A failed request falls back to the default weights.
    pub fn apply_importance(
        &mut self,
        generation: u64,
        result: Result<FeatureImportance, ApiError>,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, "dropping feature importance from a superseded load");
            return false;
        }

        let (importance, source) = match result {
            Ok(importance) => (importance, DataSource::Live),
            Err(e) => {
                tracing::error!(error = %e, "failed to load feature importance, using defaults");
                (FeatureImportance::fallback(), DataSource::Fallback)
            }
        };

        self.charts = dashboard_charts(self.stats.as_ref(), &importance, source);
        self.importance_source = Some(source);
        self.phase = LoadPhase::Ready;
        tracing::debug!(charts = self.charts.len(), "dashboard charts built");
        true
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Statistics | LoadPhase::Importance)
    }

    pub fn stats(&self) -> Option<&StatisticsSummary> {
        self.stats.as_ref()
    }

    /// Comma-grouped value for a stat card, or the placeholder.
    pub fn stat_text(&self, display: StatDisplay) -> String {
        self.stats
            .as_ref()
            .map(|stats| stats.display_text(display))
            .unwrap_or_else(|| STAT_PLACEHOLDER.to_string())
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn importance_source(&self) -> Option<DataSource> {
        self.importance_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartcare_model::ChartId;

    fn summary() -> StatisticsSummary {
        StatisticsSummary {
            total_predictions: 1247,
            high_risk_count: 312,
            medium_risk_count: 498,
            low_risk_count: 437,
            average_age: None,
            male_percentage: None,
            female_percentage: None,
        }
    }

    fn transport() -> ApiError {
        ApiError::Transport("connection refused".to_string())
    }

    #[test]
    fn test_placeholder_before_load() {
        let state = DashboardState::default();
        assert_eq!(state.stat_text(StatDisplay::TotalPredictions), STAT_PLACEHOLDER);
        assert_eq!(state.phase(), LoadPhase::Idle);
    }

    #[test]
    fn test_successful_load_builds_live_charts() {
        let mut state = DashboardState::default();
        let generation = state.begin_load();
        assert!(state.is_loading());

        assert!(state.apply_statistics(generation, Ok(summary())));
        assert_eq!(state.stat_text(StatDisplay::TotalPredictions), "1,247");
        assert_eq!(state.phase(), LoadPhase::Importance);

        assert!(state.apply_importance(
            generation,
            Ok(FeatureImportance::from_entries([("age", 0.5), ("cp", 0.5)]))
        ));
        assert_eq!(state.phase(), LoadPhase::Ready);
        assert_eq!(state.charts().len(), 6);
        assert_eq!(state.charts()[0].source, DataSource::Live);
        assert_eq!(state.charts()[1].id, ChartId::FeatureImportance);
        assert_eq!(state.charts()[1].labels, vec!["Age", "Chest Pain Type"]);
        assert_eq!(state.importance_source(), Some(DataSource::Live));
    }

    #[test]
    fn test_failures_keep_placeholder_and_fall_back() {
        let mut state = DashboardState::default();
        let generation = state.begin_load();

        assert!(state.apply_statistics(generation, Err(transport())));
        assert_eq!(state.stat_text(StatDisplay::HighRiskCount), STAT_PLACEHOLDER);

        assert!(state.apply_importance(generation, Err(transport())));
        assert_eq!(state.importance_source(), Some(DataSource::Fallback));
        assert_eq!(state.charts()[0].source, DataSource::Sample);
        assert_eq!(state.charts()[0].values, vec![437.0, 498.0, 312.0]);
        assert_eq!(state.charts()[1].values.len(), 8);
    }

    #[test]
    fn test_failed_reload_keeps_previous_values() {
        let mut state = DashboardState::default();
        let first = state.begin_load();
        state.apply_statistics(first, Ok(summary()));

        let second = state.begin_load();
        state.apply_statistics(second, Err(transport()));
        assert_eq!(state.stat_text(StatDisplay::LowRiskCount), "437");
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut state = DashboardState::default();
        let old = state.begin_load();
        let new = state.begin_load();

        assert!(!state.apply_statistics(old, Ok(summary())));
        assert!(state.stats().is_none());
        assert!(!state.apply_importance(old, Err(transport())));
        assert!(state.charts().is_empty());

        assert!(state.apply_statistics(new, Ok(summary())));
    }
}

//! Aggregate prediction statistics shown on the dashboard.

use serde::{Deserialize, Serialize};

use crate::format::format_thousands;

/// Aggregate counters returned by `GET /api/statistics`.
///
/// Fetched fresh every time the dashboard is opened; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_predictions: u64,
    pub high_risk_count: u64,
    pub medium_risk_count: u64,
    pub low_risk_count: u64,
    /// Mean patient age, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub male_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub female_percentage: Option<f64>,
}

impl StatisticsSummary {
    /// Raw counter backing a display slot.
    pub fn value(&self, display: StatDisplay) -> u64 {
        match display {
            StatDisplay::TotalPredictions => self.total_predictions,
            StatDisplay::HighRiskCount => self.high_risk_count,
            StatDisplay::MediumRiskCount => self.medium_risk_count,
            StatDisplay::LowRiskCount => self.low_risk_count,
        }
    }

    /// Comma-grouped text for a display slot.
    pub fn display_text(&self, display: StatDisplay) -> String {
        format_thousands(self.value(display))
    }
}

/// The four numeric displays at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatDisplay {
    TotalPredictions,
    HighRiskCount,
    MediumRiskCount,
    LowRiskCount,
}

impl StatDisplay {
    /// All displays in page order.
    pub const ALL: [Self; 4] = [
        Self::TotalPredictions,
        Self::HighRiskCount,
        Self::MediumRiskCount,
        Self::LowRiskCount,
    ];

    /// Element id shared with the page markup.
    pub fn id(&self) -> &'static str {
        match self {
            Self::TotalPredictions => "totalPredictions",
            Self::HighRiskCount => "highRiskCount",
            Self::MediumRiskCount => "mediumRiskCount",
            Self::LowRiskCount => "lowRiskCount",
        }
    }

    /// Caption shown under the number.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalPredictions => "Total Predictions",
            Self::HighRiskCount => "High Risk",
            Self::MediumRiskCount => "Medium Risk",
            Self::LowRiskCount => "Low Risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatisticsSummary {
        serde_json::from_str(
            r#"{
                "total_predictions": 1247,
                "high_risk_count": 312,
                "medium_risk_count": 498,
                "low_risk_count": 437,
                "average_age": 54.4,
                "male_percentage": 68.3,
                "female_percentage": 31.7
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn display_text_is_comma_grouped() {
        let stats = sample();
        let texts: Vec<_> = StatDisplay::ALL
            .iter()
            .map(|d| stats.display_text(*d))
            .collect();
        assert_eq!(texts, vec!["1,247", "312", "498", "437"]);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let stats: StatisticsSummary = serde_json::from_str(
            r#"{"total_predictions": 1, "high_risk_count": 0,
                "medium_risk_count": 0, "low_risk_count": 1}"#,
        )
        .unwrap();
        assert_eq!(stats.average_age, None);
        assert_eq!(stats.value(StatDisplay::LowRiskCount), 1);
    }

    #[test]
    fn ids_match_page_markup() {
        let ids: Vec<_> = StatDisplay::ALL.iter().map(StatDisplay::id).collect();
        assert_eq!(
            ids,
            vec!["totalPredictions", "highRiskCount", "mediumRiskCount", "lowRiskCount"]
        );
    }
}

//! Prediction results returned by `POST /api/predict`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::format_percent;
use crate::risk::RiskCategory;

/// Shown instead of the factor list when the backend reports none.
pub const NO_RISK_FACTORS_MESSAGE: &str = "No significant risk factors identified.";

/// A risk assessment for one patient.
///
/// Consumed once to render the results panel; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability in percent (0–100).
    pub risk_probability: f64,
    pub risk_category: RiskCategory,
    pub explanation: String,
    /// Contributing conditions in backend order. Absent or `null` reads as
    /// an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub risk_factors: Vec<RiskFactor>,
    /// Binary model output (1 = heart attack predicted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u8>,
    /// Accent colour suggested by the backend; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_color: Option<String>,
    /// ISO-8601 time the prediction was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RiskFactor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RiskFactor>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PredictionResult {
    /// Probability with one decimal place and a percent sign.
    pub fn probability_text(&self) -> String {
        format_percent(self.risk_probability)
    }

    pub fn has_risk_factors(&self) -> bool {
        !self.risk_factors.is_empty()
    }
}

/// A backend-identified contributing condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub description: String,
    pub severity: Severity,
    /// Measured value that triggered the factor, as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Severity label of a risk factor, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(pub String);

impl Severity {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Badge class name: the lowercased label.
    pub fn css_class(&self) -> String {
        self.0.to_lowercase()
    }

    /// Colour family of the badge.
    pub fn tone(&self) -> SeverityTone {
        match self.css_class().as_str() {
            "high" => SeverityTone::High,
            "medium" => SeverityTone::Medium,
            "low" => SeverityTone::Low,
            _ => SeverityTone::Neutral,
        }
    }
}

/// Badge colour family for a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTone {
    High,
    Medium,
    Low,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r##"{
        "prediction": 1,
        "risk_probability": 72.456,
        "risk_category": "High Risk",
        "risk_color": "#ef4444",
        "explanation": "URGENT: high risk.",
        "risk_factors": [
            {"factor": "Age", "value": 67, "severity": "High",
             "description": "Age 67 is a significant risk factor"},
            {"factor": "Cholesterol", "value": 220, "severity": "Medium",
             "description": "Cholesterol level of 220 mg/dL is elevated"}
        ],
        "timestamp": "2024-05-01T10:00:00"
    }"##;

    #[test]
    fn parses_full_backend_response() {
        let result: PredictionResult = serde_json::from_str(RESPONSE).unwrap();
        assert_eq!(result.risk_category, RiskCategory::High);
        assert_eq!(result.probability_text(), "72.5%");
        assert_eq!(result.prediction, Some(1));
        assert_eq!(result.risk_color.as_deref(), Some("#ef4444"));
        assert_eq!(result.risk_factors.len(), 2);
        assert_eq!(result.risk_factors[0].factor, "Age");
        assert_eq!(result.risk_factors[1].severity.css_class(), "medium");
    }

    #[test]
    fn missing_or_null_factors_read_as_empty() {
        let missing: PredictionResult = serde_json::from_str(
            r#"{"risk_probability": 12.0, "risk_category": "Low Risk", "explanation": "ok"}"#,
        )
        .unwrap();
        assert!(!missing.has_risk_factors());

        let null: PredictionResult = serde_json::from_str(
            r#"{"risk_probability": 12.0, "risk_category": "Low Risk",
                "explanation": "ok", "risk_factors": null}"#,
        )
        .unwrap();
        assert!(null.risk_factors.is_empty());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = serde_json::from_str::<PredictionResult>(
            r#"{"risk_category": "Low Risk", "explanation": "ok"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn severity_class_is_lowercased_label() {
        assert_eq!(Severity::new("HIGH").css_class(), "high");
        assert_eq!(Severity::new("High").tone(), SeverityTone::High);
        assert_eq!(Severity::new("Moderate").tone(), SeverityTone::Neutral);
        assert_eq!(Severity::new("Moderate").css_class(), "moderate");
    }
}

//! Risk assessment flow: form, submission, and results panel.
//!
//! ```text
//! Idle ──submit──▶ Submitting(id) ──ok──▶ Showing
//!                                 └─err─▶ Alert
//! ```
//!
//! Every submission gets a fresh [`RequestId`]. Only the response for the
//! latest id is applied; anything older is logged and dropped, so a slow
//! response can never replace a newer result or toggle the overlay.

use std::fmt;

use heartcare_client::ApiError;
use heartcare_model::{
    GaugeGradient, NO_RISK_FACTORS_MESSAGE, PatientField, PatientInput, PredictionResult,
    RiskFactor, RiskTier, SeverityTone,
};

/// Alert shown for any failed prediction.
pub const ALERT_MESSAGE: &str = "Error making prediction. Please try again.";

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submission ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: RequestId,
    pub input: PatientInput,
}

/// What applying a response did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Superseded response; nothing changed.
    Stale,
    /// Results panel now shows the new result.
    Shown,
    /// The alert is up.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    Submitting(RequestId),
    Showing,
    Alert,
}

// =============================================================================
// RESULTS VIEW-MODEL
// =============================================================================

/// One risk factor block.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorView {
    pub title: String,
    pub description: String,
    /// Severity as sent by the backend.
    pub severity: String,
    /// Lowercased severity, the badge class.
    pub badge_class: String,
    pub tone: SeverityTone,
    pub value: Option<String>,
}

impl From<&RiskFactor> for FactorView {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            title: factor.factor.clone(),
            description: factor.description.clone(),
            severity: factor.severity.as_str().to_string(),
            badge_class: factor.severity.css_class(),
            tone: factor.severity.tone(),
            value: factor.value.as_ref().map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        }
    }
}

/// Contents of the risk factor list.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorList {
    Factors(Vec<FactorView>),
    /// No factors reported; carries the message to show instead.
    Empty(&'static str),
}

/// Everything the results panel renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// Probability with one decimal and `%`.
    pub risk_value: String,
    /// Category as received.
    pub risk_label: String,
    /// Probability as a fraction for the gauge fill.
    pub fill: f32,
    pub tier: RiskTier,
    /// Gauge background.
    pub gauge: GaugeGradient,
    /// Backend explanation, verbatim.
    pub explanation: String,
    pub factors: FactorList,
    pub recommendations: &'static [&'static str; 5],
    pub recognized: bool,
    pub timestamp: Option<String>,
}

impl ResultsView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let tier = result.risk_category.tier();
        let recognized = result.risk_category.is_recognized();
        if !recognized {
            tracing::warn!(
                category = result.risk_category.label(),
                "unrecognized risk category, presenting as {}",
                tier.label()
            );
        }

        let factors = if result.has_risk_factors() {
            FactorList::Factors(result.risk_factors.iter().map(FactorView::from).collect())
        } else {
            FactorList::Empty(NO_RISK_FACTORS_MESSAGE)
        };

        Self {
            risk_value: result.probability_text(),
            risk_label: result.risk_category.label().to_string(),
            fill: (result.risk_probability / 100.0).clamp(0.0, 1.0) as f32,
            tier,
            gauge: tier.gauge(),
            explanation: result.explanation.clone(),
            factors,
            recommendations: tier.recommendations(),
            recognized,
            timestamp: result.timestamp.clone(),
        }
    }
}

// =============================================================================
// FLOW STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct PredictionState {
    form: PatientInput,
    missing: Vec<PatientField>,
    pending: Option<RequestId>,
    next_id: u64,
    results: Option<ResultsView>,
    alert: Option<&'static str>,
}

impl PredictionState {
    pub fn form(&self) -> &PatientInput {
        &self.form
    }

    pub fn set_field(&mut self, field: PatientField, value: String) {
        if !value.is_empty() {
            self.missing.retain(|f| *f != field);
        }
        self.form.set(field, value);
    }

    /// Required fields left empty at the last submit attempt.
    pub fn missing(&self) -> &[PatientField] {
        &self.missing
    }

    pub fn is_missing(&self, field: PatientField) -> bool {
        self.missing.contains(&field)
    }

    /// Validates the form and allocates a request id.
    ///
    /// Returns the missing fields instead when any required field is empty;
    /// nothing is sent in that case.
    pub fn begin_submit(&mut self) -> Result<Submission, Vec<PatientField>> {
        self.missing = self.form.missing_fields();
        if !self.missing.is_empty() {
            return Err(self.missing.clone());
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        if let Some(previous) = self.pending.replace(id) {
            tracing::debug!(%previous, %id, "superseding pending prediction");
        }
        self.alert = None;
        Ok(Submission {
            id,
            input: self.form.clone(),
        })
    }

    /// Applies the response for `id`.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<PredictionResult, ApiError>,
    ) -> Completion {
        if self.pending != Some(id) {
            tracing::debug!(%id, "dropping stale prediction response");
            return Completion::Stale;
        }
        self.pending = None;

        match result {
            Ok(result) => {
                tracing::info!(
                    %id,
                    probability = result.risk_probability,
                    category = result.risk_category.label(),
                    "prediction received"
                );
                self.results = Some(ResultsView::from_result(&result));
                Completion::Shown
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "prediction failed");
                self.alert = Some(ALERT_MESSAGE);
                Completion::Failed
            }
        }
    }

    /// Whether the loading overlay is up.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Hides the results panel and leaves the form as is.
    pub fn close_results(&mut self) {
        self.results = None;
    }

    /// Hides the results panel and clears every field.
    pub fn new_assessment(&mut self) {
        self.results = None;
        self.form.clear();
        self.missing.clear();
    }

    /// Clears the form and hides the results panel.
    pub fn reset(&mut self) {
        self.new_assessment();
    }

    /// Fresh page state. Request ids keep counting so responses to requests
    /// sent before the reload stay stale.
    pub fn reload(&mut self) {
        *self = Self {
            next_id: self.next_id,
            ..Self::default()
        };
    }

    pub fn phase(&self) -> FlowPhase {
        if let Some(id) = self.pending {
            FlowPhase::Submitting(id)
        } else if self.alert.is_some() {
            FlowPhase::Alert
        } else if self.results.is_some() {
            FlowPhase::Showing
        } else {
            FlowPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartcare_model::{RiskCategory, Severity};

    fn complete_form() -> PredictionState {
        let mut state = PredictionState::default();
        for field in PatientField::ALL {
            state.set_field(field, "1".to_string());
        }
        state
    }

    fn result(category: &str, factors: Vec<RiskFactor>) -> PredictionResult {
        PredictionResult {
            risk_probability: 72.456,
            risk_category: RiskCategory::from_label(category),
            explanation: "Elevated risk.".to_string(),
            risk_factors: factors,
            prediction: Some(1),
            risk_color: None,
            timestamp: None,
        }
    }

    fn factor(severity: &str) -> RiskFactor {
        RiskFactor {
            factor: "Age".to_string(),
            description: "Age 67 is a significant risk factor".to_string(),
            severity: Severity::new(severity),
            value: Some(serde_json::json!(67)),
        }
    }

    #[test]
    fn test_missing_fields_block_submission() {
        let mut state = PredictionState::default();
        state.set_field(PatientField::Age, "54".to_string());

        let missing = state.begin_submit().unwrap_err();
        assert_eq!(missing.len(), 12);
        assert!(!missing.contains(&PatientField::Age));
        assert!(state.is_missing(PatientField::Thall));
        assert_eq!(state.phase(), FlowPhase::Idle);

        state.set_field(PatientField::Thall, "2".to_string());
        assert!(!state.is_missing(PatientField::Thall));
    }

    #[test]
    fn test_success_shows_results() {
        let mut state = complete_form();
        let submission = state.begin_submit().unwrap();
        assert!(state.is_loading());
        assert_eq!(state.phase(), FlowPhase::Submitting(submission.id));

        let outcome = state.complete(submission.id, Ok(result("High Risk", vec![factor("High")])));
        assert_eq!(outcome, Completion::Shown);
        assert!(!state.is_loading());
        assert_eq!(state.phase(), FlowPhase::Showing);

        let view = state.results().unwrap();
        assert_eq!(view.risk_value, "72.5%");
        assert_eq!(view.risk_label, "High Risk");
        assert_eq!(view.tier, RiskTier::High);
        let FactorList::Factors(factors) = &view.factors else {
            panic!("expected factors");
        };
        assert_eq!(factors[0].badge_class, "high");
        assert_eq!(factors[0].value.as_deref(), Some("67"));
    }

    #[test]
    fn test_failure_raises_alert() {
        let mut state = complete_form();
        let submission = state.begin_submit().unwrap();
        let outcome = state.complete(
            submission.id,
            Err(ApiError::Status {
                status: 500,
                message: "model not loaded".to_string(),
            }),
        );
        assert_eq!(outcome, Completion::Failed);
        assert!(!state.is_loading());
        assert_eq!(state.alert(), Some(ALERT_MESSAGE));
        assert_eq!(state.phase(), FlowPhase::Alert);

        state.dismiss_alert();
        assert_eq!(state.phase(), FlowPhase::Idle);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = complete_form();
        let first = state.begin_submit().unwrap().id;
        let second = state.begin_submit().unwrap().id;
        assert!(second > first);

        assert_eq!(
            state.complete(first, Ok(result("Low Risk", vec![]))),
            Completion::Stale
        );
        assert!(state.is_loading());
        assert!(state.results().is_none());

        state.complete(second, Ok(result("Medium Risk", vec![])));
        assert_eq!(state.results().unwrap().tier, RiskTier::Medium);

        // the late first response cannot replace it either
        assert_eq!(
            state.complete(first, Ok(result("Low Risk", vec![]))),
            Completion::Stale
        );
        assert_eq!(state.results().unwrap().risk_label, "Medium Risk");
    }

    #[test]
    fn test_no_factors_message() {
        let view = ResultsView::from_result(&result("Low Risk", vec![]));
        assert_eq!(view.factors, FactorList::Empty(NO_RISK_FACTORS_MESSAGE));
        assert_eq!(view.recommendations.len(), 5);
    }

    #[test]
    fn test_unrecognized_category_uses_high_tier() {
        let view = ResultsView::from_result(&result("Moderate", vec![]));
        assert!(!view.recognized);
        assert_eq!(view.risk_label, "Moderate");
        assert_eq!(view.tier, RiskTier::High);
        assert_eq!(view.gauge, RiskTier::High.gauge());
    }

    #[test]
    fn test_close_keeps_form_new_assessment_clears() {
        let mut state = complete_form();
        let id = state.begin_submit().unwrap().id;
        state.complete(id, Ok(result("Low Risk", vec![])));

        state.close_results();
        assert!(state.results().is_none());
        assert!(state.form().is_complete());

        let id = state.begin_submit().unwrap().id;
        state.complete(id, Ok(result("Low Risk", vec![])));
        state.new_assessment();
        assert!(state.results().is_none());
        assert_eq!(state.form().missing_fields().len(), 13);
    }

    #[test]
    fn test_reload_makes_inflight_response_stale() {
        let mut state = complete_form();
        let id = state.begin_submit().unwrap().id;
        state.reload();
        assert!(!state.is_loading());
        assert_eq!(state.complete(id, Ok(result("Low Risk", vec![]))), Completion::Stale);

        let mut state = complete_form();
        state.reload();
        assert_eq!(state.form().missing_fields().len(), 13);
    }
}

//! Data model for the HeartCare risk assessment client.
//!
//! This crate holds the types exchanged with the prediction backend and the
//! display metadata derived from them. It has no knowledge of any particular
//! front end: the desktop GUI and the CLI both render from these types.
//!
//! # Module Organization
//!
//! - [`statistics`]: aggregate prediction counters and their display slots
//! - [`feature`]: feature-importance weights and clinical feature labels
//! - [`patient`]: the thirteen-field patient form
//! - [`prediction`]: backend prediction results and risk factors
//! - [`risk`]: risk categories, tiers, gauge gradients, recommendations
//! - [`chart`]: chart specifications for the analytics dashboard
//! - [`format`]: number formatting shared by every front end

pub mod chart;
pub mod color;
pub mod feature;
pub mod format;
pub mod patient;
pub mod prediction;
pub mod risk;
pub mod statistics;

pub use chart::{ChartId, ChartKind, ChartSpec, DataSource, dashboard_charts};
pub use color::Rgb;
pub use feature::{FEATURE_LABELS, FeatureImportance, feature_label};
pub use format::{format_percent, format_thousands};
pub use patient::{ChoiceOption, FieldKind, PatientField, PatientInput};
pub use prediction::{NO_RISK_FACTORS_MESSAGE, PredictionResult, RiskFactor, Severity, SeverityTone};
pub use risk::{GaugeGradient, RiskCategory, RiskTier};
pub use statistics::{StatDisplay, StatisticsSummary};

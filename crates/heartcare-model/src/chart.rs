//! Chart specifications for the analytics dashboard.
//!
//! Two charts are driven by the backend (risk distribution from the
//! statistics counters, feature importance from the importance weights).
//! The other four carry sample data and say so through
//! [`DataSource::Sample`].

use crate::color::Rgb;
use crate::feature::FeatureImportance;
use crate::risk::RiskTier;
use crate::statistics::StatisticsSummary;

/// The six dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    RiskDistribution,
    FeatureImportance,
    AgeDistribution,
    GenderDistribution,
    Cholesterol,
    BloodPressure,
}

impl ChartId {
    pub const ALL: [Self; 6] = [
        Self::RiskDistribution,
        Self::FeatureImportance,
        Self::AgeDistribution,
        Self::GenderDistribution,
        Self::Cholesterol,
        Self::BloodPressure,
    ];

    /// Canvas id shared with the page markup.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            Self::RiskDistribution => "riskDistributionChart",
            Self::FeatureImportance => "featureImportanceChart",
            Self::AgeDistribution => "ageDistributionChart",
            Self::GenderDistribution => "genderDistributionChart",
            Self::Cholesterol => "cholesterolChart",
            Self::BloodPressure => "bloodPressureChart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::RiskDistribution => "Risk Distribution",
            Self::FeatureImportance => "Feature Importance",
            Self::AgeDistribution => "Age Distribution",
            Self::GenderDistribution => "Gender Distribution",
            Self::Cholesterol => "Cholesterol Levels",
            Self::BloodPressure => "Blood Pressure Trends",
        }
    }
}

/// Where a chart's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the backend on this page load.
    Live,
    /// The backend call failed; built-in defaults are shown.
    Fallback,
    /// Embedded sample numbers, not connected to the backend.
    Sample,
}

impl DataSource {
    /// Caption for non-live data.
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            Self::Live => None,
            Self::Fallback => Some("Default values (backend unavailable)"),
            Self::Sample => Some("Sample data"),
        }
    }
}

/// Visual form of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Doughnut,
    Pie,
    Bar {
        horizontal: bool,
        /// Fixed value-axis maximum; computed from the data when `None`.
        axis_max: Option<f64>,
        /// Appended to axis tick labels.
        value_suffix: &'static str,
    },
    Line {
        fill: bool,
        /// Curve smoothing between 0 (straight) and 1.
        tension: f32,
    },
}

impl ChartKind {
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Doughnut | Self::Pie)
    }
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    /// Dataset label (legend / tooltip title).
    pub series_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One colour per value, or a single colour for the whole series.
    pub colors: Vec<Rgb>,
    pub source: DataSource,
}

impl ChartSpec {
    pub fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Colour for the value at `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::new(0x66, 0x7e, 0xea);
        }
        self.colors[index % self.colors.len()]
    }

    /// Upper bound of the value axis.
    pub fn value_max(&self) -> f64 {
        if let ChartKind::Bar {
            axis_max: Some(max),
            ..
        } = self.kind
        {
            return max;
        }
        let max = self.values.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 { 1.0 } else { nice_ceiling(max) }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// `(label, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Round up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_ceiling(value: f64) -> f64 {
    let magnitude = 10f64.powf(value.log10().floor());
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= value {
            return candidate;
        }
    }
    10.0 * magnitude
}

const SAMPLE_RISK_COUNTS: [f64; 3] = [437.0, 498.0, 312.0];

const IMPORTANCE_COLORS: [Rgb; 8] = [
    Rgb::new(0x66, 0x7e, 0xea),
    Rgb::new(0x76, 0x4b, 0xa2),
    Rgb::new(0xf0, 0x93, 0xfb),
    Rgb::new(0xf5, 0x57, 0x6c),
    Rgb::new(0x4f, 0xac, 0xfe),
    Rgb::new(0x00, 0xf2, 0xfe),
    Rgb::new(0x43, 0xe9, 0x7b),
    Rgb::new(0x38, 0xf9, 0xd7),
];

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Doughnut of low / medium / high counts.
pub fn risk_distribution(stats: Option<&StatisticsSummary>) -> ChartSpec {
    let (values, source) = match stats {
        Some(stats) => (
            vec![
                stats.low_risk_count as f64,
                stats.medium_risk_count as f64,
                stats.high_risk_count as f64,
            ],
            DataSource::Live,
        ),
        None => (SAMPLE_RISK_COUNTS.to_vec(), DataSource::Sample),
    };
    ChartSpec {
        id: ChartId::RiskDistribution,
        kind: ChartKind::Doughnut,
        series_label: "Patients",
        labels: RiskTier::ALL.iter().map(|t| t.label().to_string()).collect(),
        values,
        colors: RiskTier::ALL.iter().map(RiskTier::accent).collect(),
        source,
    }
}

/// Horizontal bars of feature weights in percent.
pub fn feature_importance(importance: &FeatureImportance, source: DataSource) -> ChartSpec {
    ChartSpec {
        id: ChartId::FeatureImportance,
        kind: ChartKind::Bar {
            horizontal: true,
            axis_max: Some(30.0),
            value_suffix: "%",
        },
        series_label: "Importance (%)",
        labels: importance.labels(),
        values: importance.percentages(),
        colors: IMPORTANCE_COLORS.to_vec(),
        source,
    }
}

pub fn age_distribution() -> ChartSpec {
    ChartSpec {
        id: ChartId::AgeDistribution,
        kind: ChartKind::Line {
            fill: true,
            tension: 0.4,
        },
        series_label: "Number of Patients",
        labels: labels(&["29-35", "36-42", "43-49", "50-56", "57-63", "64-70", "71-77"]),
        values: vec![28.0, 45.0, 62.0, 78.0, 54.0, 28.0, 7.0],
        colors: vec![Rgb::new(0x66, 0x7e, 0xea)],
        source: DataSource::Sample,
    }
}

pub fn gender_distribution() -> ChartSpec {
    ChartSpec {
        id: ChartId::GenderDistribution,
        kind: ChartKind::Pie,
        series_label: "Patients (%)",
        labels: labels(&["Male", "Female"]),
        values: vec![68.3, 31.7],
        colors: vec![Rgb::new(0x3b, 0x82, 0xf6), Rgb::new(0xec, 0x48, 0x99)],
        source: DataSource::Sample,
    }
}

pub fn cholesterol_levels() -> ChartSpec {
    ChartSpec {
        id: ChartId::Cholesterol,
        kind: ChartKind::Bar {
            horizontal: false,
            axis_max: None,
            value_suffix: "",
        },
        series_label: "Patients",
        labels: labels(&["<200", "200-239", "240-279", "280+"]),
        values: vec![245.0, 412.0, 358.0, 232.0],
        colors: vec![Rgb::new(0x16, 0xa3, 0x4a)],
        source: DataSource::Sample,
    }
}

pub fn blood_pressure() -> ChartSpec {
    ChartSpec {
        id: ChartId::BloodPressure,
        kind: ChartKind::Line {
            fill: true,
            tension: 0.4,
        },
        series_label: "Patients",
        labels: labels(&["<120", "120-129", "130-139", "140-159", "160+"]),
        values: vec![156.0, 298.0, 387.0, 312.0, 94.0],
        colors: vec![Rgb::new(0x25, 0x63, 0xeb)],
        source: DataSource::Sample,
    }
}

/// All six charts in page order.
pub fn dashboard_charts(
    stats: Option<&StatisticsSummary>,
    importance: &FeatureImportance,
    importance_source: DataSource,
) -> Vec<ChartSpec> {
    vec![
        risk_distribution(stats),
        feature_importance(importance, importance_source),
        age_distribution(),
        gender_distribution(),
        cholesterol_levels(),
        blood_pressure(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> StatisticsSummary {
        StatisticsSummary {
            total_predictions: 10,
            high_risk_count: 2,
            medium_risk_count: 3,
            low_risk_count: 5,
            average_age: None,
            male_percentage: None,
            female_percentage: None,
        }
    }

    #[test]
    fn dashboard_has_six_charts_in_page_order() {
        let charts = dashboard_charts(None, &FeatureImportance::fallback(), DataSource::Fallback);
        let ids: Vec<_> = charts.iter().map(|c| c.id).collect();
        assert_eq!(ids, ChartId::ALL.to_vec());
    }

    #[test]
    fn four_charts_are_sample_data() {
        let charts = dashboard_charts(
            Some(&stats()),
            &FeatureImportance::fallback(),
            DataSource::Live,
        );
        let sample = charts
            .iter()
            .filter(|c| c.source == DataSource::Sample)
            .count();
        assert_eq!(sample, 4);
    }

    #[test]
    fn risk_distribution_uses_statistics_when_available() {
        let live = risk_distribution(Some(&stats()));
        assert_eq!(live.values, vec![5.0, 3.0, 2.0]);
        assert_eq!(live.source, DataSource::Live);
        assert_eq!(live.labels, vec!["Low Risk", "Medium Risk", "High Risk"]);

        let sample = risk_distribution(None);
        assert_eq!(sample.values, vec![437.0, 498.0, 312.0]);
        assert_eq!(sample.source, DataSource::Sample);
    }

    #[test]
    fn fallback_importance_renders_eight_bars() {
        let chart = feature_importance(&FeatureImportance::fallback(), DataSource::Fallback);
        assert_eq!(chart.labels.len(), 8);
        assert_eq!(chart.labels[0], "Chest Pain Type");
        assert!((chart.values[0] - 25.0).abs() < 1e-9);
        assert_eq!(chart.value_max(), 30.0);
        assert_eq!(chart.source.caption(), Some("Default values (backend unavailable)"));
    }

    #[test]
    fn colors_cycle_when_series_is_longer() {
        let chart = cholesterol_levels();
        assert_eq!(chart.color_at(0), chart.color_at(3));
        let importance = feature_importance(
            &FeatureImportance::from_entries((0..10).map(|i| (format!("f{i}"), 0.1))),
            DataSource::Live,
        );
        assert_eq!(importance.color_at(8), importance.color_at(0));
    }

    #[test]
    fn value_axis_rounds_up() {
        assert_eq!(cholesterol_levels().value_max(), 500.0);
        assert_eq!(age_distribution().value_max(), 100.0);
        assert_eq!(blood_pressure().value_max(), 500.0);
    }
}

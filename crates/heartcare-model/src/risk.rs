//! Risk categories and the display metadata attached to them.
//!
//! The backend labels each prediction with a category string. Only the three
//! exact, case-sensitive labels are recognised; anything else is kept as
//! [`RiskCategory::Unrecognized`] and presented with the high-risk tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Backend risk category as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    /// A label outside the three known ones, kept verbatim for display.
    Unrecognized(String),
}

impl RiskCategory {
    pub const LOW_LABEL: &'static str = "Low Risk";
    pub const MEDIUM_LABEL: &'static str = "Medium Risk";
    pub const HIGH_LABEL: &'static str = "High Risk";

    /// Exact, case-sensitive match on the backend label.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::LOW_LABEL => Self::Low,
            Self::MEDIUM_LABEL => Self::Medium,
            Self::HIGH_LABEL => Self::High,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Label as shown to the user (the backend string for unknown labels).
    pub fn label(&self) -> &str {
        match self {
            Self::Low => Self::LOW_LABEL,
            Self::Medium => Self::MEDIUM_LABEL,
            Self::High => Self::HIGH_LABEL,
            Self::Unrecognized(label) => label,
        }
    }

    /// Presentation tier. Unrecognised labels use the high-risk tier.
    pub fn tier(&self) -> RiskTier {
        match self {
            Self::Low => RiskTier::Low,
            Self::Medium => RiskTier::Medium,
            Self::High | Self::Unrecognized(_) => RiskTier::High,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for RiskCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<RiskCategory> for String {
    fn from(category: RiskCategory) -> Self {
        match category {
            RiskCategory::Unrecognized(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Background gradient of the risk gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGradient {
    /// CSS-style angle in degrees.
    pub angle_degrees: f32,
    pub from: Rgb,
    pub to: Rgb,
}

impl GaugeGradient {
    const ANGLE: f32 = 135.0;

    const fn new(from: Rgb, to: Rgb) -> Self {
        Self {
            angle_degrees: Self::ANGLE,
            from,
            to,
        }
    }

    /// CSS `linear-gradient` form, useful for logs and text output.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.angle_degrees, self.from, self.to
        )
    }
}

const LOW_RECOMMENDATIONS: [&str; 5] = [
    "Maintain current healthy lifestyle practices",
    "Continue regular health check-ups",
    "Stay physically active with regular exercise",
    "Maintain healthy diet and weight",
    "Annual cardiac health screening recommended",
];

const MEDIUM_RECOMMENDATIONS: [&str; 5] = [
    "Schedule a medical consultation for cardiac assessment",
    "Regular monitoring of blood pressure and cholesterol",
    "Adopt heart-healthy diet and exercise routine",
    "Consider stress management techniques",
    "Follow up with healthcare provider within 3-6 months",
];

const HIGH_RECOMMENDATIONS: [&str; 5] = [
    "Immediate medical consultation is strongly recommended",
    "Comprehensive cardiac evaluation should be scheduled",
    "Consider stress test and advanced cardiac imaging",
    "Discuss preventive medication options with your doctor",
    "Implement strict lifestyle modifications immediately",
];

/// One of the three presentation tiers driving colour and advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn gauge(&self) -> GaugeGradient {
        match self {
            Self::Low => GaugeGradient::new(Rgb::new(0x10, 0xb9, 0x81), Rgb::new(0x05, 0x96, 0x69)),
            Self::Medium => {
                GaugeGradient::new(Rgb::new(0xf5, 0x9e, 0x0b), Rgb::new(0xd9, 0x77, 0x06))
            }
            Self::High => GaugeGradient::new(Rgb::new(0xef, 0x44, 0x44), Rgb::new(0xdc, 0x26, 0x26)),
        }
    }

    /// Solid accent colour, also used by the risk distribution chart.
    pub fn accent(&self) -> Rgb {
        self.gauge().from
    }

    /// The fixed five-item recommendation list for this tier.
    pub fn recommendations(&self) -> &'static [&'static str; 5] {
        match self {
            Self::Low => &LOW_RECOMMENDATIONS,
            Self::Medium => &MEDIUM_RECOMMENDATIONS,
            Self::High => &HIGH_RECOMMENDATIONS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => RiskCategory::LOW_LABEL,
            Self::Medium => RiskCategory::MEDIUM_LABEL,
            Self::High => RiskCategory::HIGH_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_labels_map_to_their_tiers() {
        assert_eq!(RiskCategory::from_label("Low Risk").tier(), RiskTier::Low);
        assert_eq!(RiskCategory::from_label("Medium Risk").tier(), RiskTier::Medium);
        assert_eq!(RiskCategory::from_label("High Risk").tier(), RiskTier::High);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let category = RiskCategory::from_label("low risk");
        assert_eq!(category, RiskCategory::Unrecognized("low risk".into()));
        assert_eq!(category.tier(), RiskTier::High);
        assert_eq!(category.label(), "low risk");
    }

    #[test]
    fn unrecognized_uses_high_gradient_and_recommendations() {
        let category = RiskCategory::from_label("Critical");
        assert_eq!(category.tier().gauge(), RiskTier::High.gauge());
        assert_eq!(
            category.tier().recommendations()[0],
            "Immediate medical consultation is strongly recommended"
        );
    }

    #[test]
    fn gradients_match_page_styles() {
        assert_eq!(
            RiskTier::Low.gauge().css(),
            "linear-gradient(135deg, #10b981 0%, #059669 100%)"
        );
        assert_eq!(
            RiskTier::Medium.gauge().css(),
            "linear-gradient(135deg, #f59e0b 0%, #d97706 100%)"
        );
        assert_eq!(
            RiskTier::High.gauge().css(),
            "linear-gradient(135deg, #ef4444 0%, #dc2626 100%)"
        );
    }

    #[test]
    fn recommendation_sets_are_distinct() {
        let sets: Vec<_> = RiskTier::ALL.iter().map(RiskTier::recommendations).collect();
        assert_ne!(sets[0], sets[1]);
        assert_ne!(sets[1], sets[2]);
        assert_ne!(sets[0], sets[2]);
    }

    #[test]
    fn serde_round_trips_labels() {
        let category: RiskCategory = serde_json::from_str(r#""Medium Risk""#).unwrap();
        assert_eq!(category, RiskCategory::Medium);
        assert_eq!(serde_json::to_string(&category).unwrap(), r#""Medium Risk""#);

        let odd: RiskCategory = serde_json::from_str(r#""Very High""#).unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), r#""Very High""#);
    }

    proptest! {
        #[test]
        fn any_other_label_falls_into_high_tier(label in "\\PC*") {
            prop_assume!(!["Low Risk", "Medium Risk", "High Risk"].contains(&label.as_str()));
            let category = RiskCategory::from_label(&label);
            prop_assert!(!category.is_recognized());
            prop_assert_eq!(category.tier(), RiskTier::High);
        }
    }
}

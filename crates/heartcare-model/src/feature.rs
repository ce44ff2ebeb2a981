//! Feature-importance weights and clinical feature labels.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Human-readable labels for the features the backend reports on.
pub const FEATURE_LABELS: [(&str, &str); 8] = [
    ("cp", "Chest Pain Type"),
    ("thalachh", "Max Heart Rate"),
    ("oldpeak", "ST Depression"),
    ("caa", "Major Vessels"),
    ("age", "Age"),
    ("sex", "Gender"),
    ("trtbps", "Blood Pressure"),
    ("chol", "Cholesterol"),
];

/// Weights used when `GET /api/feature-importance` fails.
const FALLBACK_WEIGHTS: [(&str, f64); 8] = [
    ("cp", 0.25),
    ("thalachh", 0.18),
    ("oldpeak", 0.15),
    ("caa", 0.12),
    ("age", 0.10),
    ("sex", 0.08),
    ("trtbps", 0.06),
    ("chol", 0.06),
];

/// Display label for a feature key; unknown keys are shown as-is.
pub fn feature_label(key: &str) -> &str {
    FEATURE_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

/// Relative weight of each clinical input in the risk model.
///
/// Serialized as a JSON object. Entry order follows the order of keys in
/// the response, which is also the display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureImportance {
    entries: Vec<(String, f64)>,
}

impl FeatureImportance {
    /// Build from ordered entries. A repeated key keeps its first position
    /// and takes the last weight.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut importance = Self::default();
        for (key, weight) in entries {
            importance.insert(key.into(), weight);
        }
        importance
    }

    /// The fixed eight-entry mapping used when the backend is unavailable.
    pub fn fallback() -> Self {
        Self::from_entries(FALLBACK_WEIGHTS)
    }

    fn insert(&mut self, key: String, weight: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((key, weight)),
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Weight for a key, if present.
    pub fn weight(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(k, _)| feature_label(k).to_string())
            .collect()
    }

    /// Weights scaled to percentages (`0.25` → `25.0`).
    pub fn percentages(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, w)| w * 100.0).collect()
    }
}

impl Serialize for FeatureImportance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, weight) in &self.entries {
            map.serialize_entry(key, weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureImportance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = FeatureImportance;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of feature keys to weights")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut importance = FeatureImportance::default();
                while let Some((key, weight)) = access.next_entry::<String, f64>()? {
                    importance.insert(key, weight);
                }
                Ok(importance)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_response_key_order() {
        let importance: FeatureImportance =
            serde_json::from_str(r#"{"chol": 0.3, "age": 0.2, "cp": 0.5}"#).unwrap();
        let keys: Vec<_> = importance.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["chol", "age", "cp"]);
    }

    #[test]
    fn unknown_keys_use_raw_key_as_label() {
        let importance = FeatureImportance::from_entries([("cp", 0.4), ("thall", 0.1)]);
        assert_eq!(importance.labels(), vec!["Chest Pain Type", "thall"]);
    }

    #[test]
    fn fallback_has_eight_known_entries() {
        let fallback = FeatureImportance::fallback();
        assert_eq!(fallback.len(), 8);
        assert_eq!(fallback.weight("cp"), Some(0.25));
        assert_eq!(fallback.weight("chol"), Some(0.06));
        assert!(
            fallback
                .entries()
                .iter()
                .all(|(k, _)| feature_label(k) != k.as_str())
        );
    }

    #[test]
    fn percentages_scale_weights() {
        let importance = FeatureImportance::from_entries([("cp", 0.25), ("age", 0.1)]);
        let pct = importance.percentages();
        assert!((pct[0] - 25.0).abs() < 1e-9);
        assert!((pct[1] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_key_keeps_first_position() {
        let importance = FeatureImportance::from_entries([("cp", 0.1), ("age", 0.2), ("cp", 0.3)]);
        assert_eq!(importance.len(), 2);
        assert_eq!(importance.entries()[0], ("cp".to_string(), 0.3));
    }

    #[test]
    fn serializes_as_object_in_order() {
        let importance = FeatureImportance::from_entries([("sex", 0.08), ("age", 0.1)]);
        assert_eq!(
            serde_json::to_string(&importance).unwrap(),
            r#"{"sex":0.08,"age":0.1}"#
        );
    }

    #[test]
    fn rejects_non_numeric_weights() {
        assert!(serde_json::from_str::<FeatureImportance>(r#"{"cp": "high"}"#).is_err());
    }
}

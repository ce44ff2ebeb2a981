//! The patient assessment form.
//!
//! Values are kept exactly as entered and sent to the backend verbatim; the
//! only client-side rule is that every field is required.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry in a fixed choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value sent to the backend.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

const fn choice(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

const SEX_OPTIONS: &[ChoiceOption] = &[choice("1", "Male"), choice("0", "Female")];

const CP_OPTIONS: &[ChoiceOption] = &[
    choice("0", "Typical Angina"),
    choice("1", "Atypical Angina"),
    choice("2", "Non-anginal Pain"),
    choice("3", "Asymptomatic"),
];

const FBS_OPTIONS: &[ChoiceOption] = &[
    choice("1", "Yes (> 120 mg/dl)"),
    choice("0", "No (<= 120 mg/dl)"),
];

const RESTECG_OPTIONS: &[ChoiceOption] = &[
    choice("0", "Normal"),
    choice("1", "ST-T Wave Abnormality"),
    choice("2", "Left Ventricular Hypertrophy"),
];

const EXNG_OPTIONS: &[ChoiceOption] = &[choice("1", "Yes"), choice("0", "No")];

const SLP_OPTIONS: &[ChoiceOption] = &[
    choice("0", "Upsloping"),
    choice("1", "Flat"),
    choice("2", "Downsloping"),
];

const CAA_OPTIONS: &[ChoiceOption] = &[
    choice("0", "0"),
    choice("1", "1"),
    choice("2", "2"),
    choice("3", "3"),
    choice("4", "4"),
];

const THALL_OPTIONS: &[ChoiceOption] = &[
    choice("0", "Unknown"),
    choice("1", "Fixed Defect"),
    choice("2", "Normal"),
    choice("3", "Reversible Defect"),
];

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free numeric entry with a suggested range.
    Number {
        min: f64,
        max: f64,
        step: f64,
        unit: Option<&'static str>,
    },
    /// One of a fixed set of coded values.
    Choice(&'static [ChoiceOption]),
}

/// The thirteen clinical inputs of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Age,
    Sex,
    Cp,
    Trtbps,
    Chol,
    Fbs,
    Restecg,
    Thalachh,
    Exng,
    Oldpeak,
    Slp,
    Caa,
    Thall,
}

impl PatientField {
    /// All fields in form order.
    pub const ALL: [Self; 13] = [
        Self::Age,
        Self::Sex,
        Self::Cp,
        Self::Trtbps,
        Self::Chol,
        Self::Fbs,
        Self::Restecg,
        Self::Thalachh,
        Self::Exng,
        Self::Oldpeak,
        Self::Slp,
        Self::Caa,
        Self::Thall,
    ];

    /// Field id, shared with the page markup and the JSON body.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::Cp => "cp",
            Self::Trtbps => "trtbps",
            Self::Chol => "chol",
            Self::Fbs => "fbs",
            Self::Restecg => "restecg",
            Self::Thalachh => "thalachh",
            Self::Exng => "exng",
            Self::Oldpeak => "oldpeak",
            Self::Slp => "slp",
            Self::Caa => "caa",
            Self::Thall => "thall",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Gender",
            Self::Cp => "Chest Pain Type",
            Self::Trtbps => "Resting Blood Pressure",
            Self::Chol => "Cholesterol",
            Self::Fbs => "Fasting Blood Sugar > 120 mg/dl",
            Self::Restecg => "Resting ECG Results",
            Self::Thalachh => "Maximum Heart Rate Achieved",
            Self::Exng => "Exercise Induced Angina",
            Self::Oldpeak => "ST Depression (Oldpeak)",
            Self::Slp => "Slope of Peak Exercise ST",
            Self::Caa => "Number of Major Vessels",
            Self::Thall => "Thalassemia",
        }
    }

    pub fn kind(&self) -> FieldKind {
        let number = |min, max, step, unit| FieldKind::Number {
            min,
            max,
            step,
            unit,
        };
        match self {
            Self::Age => number(1.0, 120.0, 1.0, Some("years")),
            Self::Trtbps => number(80.0, 220.0, 1.0, Some("mm Hg")),
            Self::Chol => number(100.0, 600.0, 1.0, Some("mg/dl")),
            Self::Thalachh => number(60.0, 220.0, 1.0, Some("bpm")),
            Self::Oldpeak => number(0.0, 10.0, 0.1, None),
            Self::Sex => FieldKind::Choice(SEX_OPTIONS),
            Self::Cp => FieldKind::Choice(CP_OPTIONS),
            Self::Fbs => FieldKind::Choice(FBS_OPTIONS),
            Self::Restecg => FieldKind::Choice(RESTECG_OPTIONS),
            Self::Exng => FieldKind::Choice(EXNG_OPTIONS),
            Self::Slp => FieldKind::Choice(SLP_OPTIONS),
            Self::Caa => FieldKind::Choice(CAA_OPTIONS),
            Self::Thall => FieldKind::Choice(THALL_OPTIONS),
        }
    }

    /// Look a field up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    /// The choice whose value matches `value`, for choice fields.
    pub fn choice_for(&self, value: &str) -> Option<ChoiceOption> {
        match self.kind() {
            FieldKind::Choice(options) => options.iter().find(|o| o.value == value).copied(),
            FieldKind::Number { .. } => None,
        }
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST /api/predict`: thirteen raw string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    pub age: String,
    pub sex: String,
    pub cp: String,
    pub trtbps: String,
    pub chol: String,
    pub fbs: String,
    pub restecg: String,
    pub thalachh: String,
    pub exng: String,
    pub oldpeak: String,
    pub slp: String,
    pub caa: String,
    pub thall: String,
}

impl PatientInput {
    pub fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::Age => &self.age,
            PatientField::Sex => &self.sex,
            PatientField::Cp => &self.cp,
            PatientField::Trtbps => &self.trtbps,
            PatientField::Chol => &self.chol,
            PatientField::Fbs => &self.fbs,
            PatientField::Restecg => &self.restecg,
            PatientField::Thalachh => &self.thalachh,
            PatientField::Exng => &self.exng,
            PatientField::Oldpeak => &self.oldpeak,
            PatientField::Slp => &self.slp,
            PatientField::Caa => &self.caa,
            PatientField::Thall => &self.thall,
        }
    }

    fn slot(&mut self, field: PatientField) -> &mut String {
        match field {
            PatientField::Age => &mut self.age,
            PatientField::Sex => &mut self.sex,
            PatientField::Cp => &mut self.cp,
            PatientField::Trtbps => &mut self.trtbps,
            PatientField::Chol => &mut self.chol,
            PatientField::Fbs => &mut self.fbs,
            PatientField::Restecg => &mut self.restecg,
            PatientField::Thalachh => &mut self.thalachh,
            PatientField::Exng => &mut self.exng,
            PatientField::Oldpeak => &mut self.oldpeak,
            PatientField::Slp => &mut self.slp,
            PatientField::Caa => &mut self.caa,
            PatientField::Thall => &mut self.thall,
        }
    }

    /// Replace a field's value. The value is stored verbatim.
    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: PatientField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields left empty, in form order. Whitespace counts as a value and is
    /// left for the backend to reject.
    pub fn missing_fields(&self) -> Vec<PatientField> {
        PatientField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Clear every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PatientInput {
        PatientInput {
            age: "63".into(),
            sex: "1".into(),
            cp: "3".into(),
            trtbps: "145".into(),
            chol: "233".into(),
            fbs: "1".into(),
            restecg: "0".into(),
            thalachh: "150".into(),
            exng: "0".into(),
            oldpeak: "2.3".into(),
            slp: "0".into(),
            caa: "0".into(),
            thall: "1".into(),
        }
    }

    #[test]
    fn every_field_round_trips_through_get_and_set() {
        let mut input = PatientInput::default();
        for field in PatientField::ALL {
            input.set(field, field.id());
        }
        for field in PatientField::ALL {
            assert_eq!(input.get(field), field.id());
        }
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        for field in PatientField::ALL {
            assert_eq!(PatientField::from_id(field.id()), Some(field));
        }
        assert_eq!(PatientField::from_id("unknown"), None);
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let input = complete()
            .with(PatientField::Thall, "")
            .with(PatientField::Age, "");
        assert_eq!(
            input.missing_fields(),
            vec![PatientField::Age, PatientField::Thall]
        );
        assert!(complete().is_complete());
    }

    #[test]
    fn whitespace_counts_as_filled_and_is_sent_as_is() {
        let input = complete().with(PatientField::Chol, "  ");
        assert!(input.is_complete());
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["chol"], "  ");
    }

    #[test]
    fn values_are_sent_verbatim() {
        let input = complete().with(PatientField::Oldpeak, "2.30");
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["oldpeak"], "2.30");
        assert_eq!(json["age"], "63");
    }

    #[test]
    fn serializes_all_thirteen_fields_as_strings() {
        insta::assert_json_snapshot!(complete(), @r#"
        {
          "age": "63",
          "sex": "1",
          "cp": "3",
          "trtbps": "145",
          "chol": "233",
          "fbs": "1",
          "restecg": "0",
          "thalachh": "150",
          "exng": "0",
          "oldpeak": "2.3",
          "slp": "0",
          "caa": "0",
          "thall": "1"
        }
        "#);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut input = complete();
        input.clear();
        assert_eq!(input.missing_fields().len(), 13);
    }

    #[test]
    fn choice_lookup_uses_coded_value() {
        assert_eq!(
            PatientField::Cp.choice_for("3").map(|o| o.label),
            Some("Asymptomatic")
        );
        assert_eq!(PatientField::Age.choice_for("3"), None);
    }
}

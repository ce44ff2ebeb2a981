//! Patient input files for `predict --input`.
//!
//! The file is a JSON object keyed by field id. Values may be strings or
//! numbers; numbers are sent as their JSON text. Unknown keys are ignored
//! with a warning and missing keys are left blank.

use std::path::Path;

use anyhow::{Context, Result, bail};
use heartcare_model::{PatientField, PatientInput};
use serde_json::Value;

pub fn read_patient_file(path: &Path) -> Result<PatientInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read patient file {}", path.display()))?;
    parse_patient_json(&text).with_context(|| format!("parse patient file {}", path.display()))
}

pub fn parse_patient_json(text: &str) -> Result<PatientInput> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = value else {
        bail!("expected a JSON object keyed by field id");
    };

    let mut input = PatientInput::default();
    for (key, value) in &map {
        let Some(field) = PatientField::from_id(key) else {
            tracing::warn!(key = %key, "ignoring unknown patient field");
            continue;
        };
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            other => bail!("field {key} must be a string or number, got {other}"),
        };
        input.set(field, text);
    }
    Ok(input)
}

/// Fails with the ids of every blank field.
pub fn require_complete(input: &PatientInput) -> Result<()> {
    let missing = input.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }
    let ids: Vec<&str> = missing.iter().map(PatientField::id).collect();
    bail!("missing required fields: {}", ids.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strings_and_numbers() {
        let input = parse_patient_json(r#"{"age": 63, "sex": "1", "oldpeak": 2.3}"#).unwrap();
        assert_eq!(input.age, "63");
        assert_eq!(input.sex, "1");
        assert_eq!(input.oldpeak, "2.3");
        assert_eq!(input.cp, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let input = parse_patient_json(r#"{"age": "50", "name": "x"}"#).unwrap();
        assert_eq!(input.age, "50");
    }

    #[test]
    fn test_rejects_non_objects_and_nested_values() {
        assert!(parse_patient_json("[1, 2]").is_err());
        assert!(parse_patient_json(r#"{"age": [63]}"#).is_err());
    }

    #[test]
    fn test_require_complete_lists_missing_ids() {
        let input = PatientInput::default().with(PatientField::Age, "63");
        let err = require_complete(&input).unwrap_err().to_string();
        assert!(err.starts_with("missing required fields: sex, cp"));
        assert!(!err.contains("age"));
    }
}

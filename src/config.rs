//! Building an [`ExtractOptions`] record from an options file and CLI flags.

use std::path::Path;

use character_types::{ExtractOptions, Stage};
use serde_json::Value;
use tracing::warn;

use crate::error::ExtractError;

/// Normalise an arbitrary JSON value into options. Anything that is not an
/// object gives the defaults; inside an object only real booleans count.
pub fn options_from_value(value: Value) -> ExtractOptions {
    if !value.is_object() {
        warn!(kind = json_kind(&value), "options are not an object, using defaults");
        return ExtractOptions::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "unusable options, using defaults");
        ExtractOptions::default()
    })
}

/// Parse options from JSON text. Only syntactically broken JSON is an error.
pub fn options_from_json(json: &str) -> Result<ExtractOptions, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    Ok(options_from_value(value))
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<ExtractOptions, ExtractError> {
    let json = std::fs::read_to_string(path).map_err(|source| ExtractError::ReadOptions {
        path: path.to_path_buf(),
        source,
    })?;
    options_from_json(&json).map_err(|source| ExtractError::ParseOptions {
        path: path.to_path_buf(),
        source,
    })
}

/// Switch off each listed stage.
pub fn disable_stages(mut options: ExtractOptions, stages: &[Stage]) -> ExtractOptions {
    for stage in stages {
        options.set(*stage, false);
    }
    options
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_gives_defaults() {
        assert_eq!(options_from_value(json!(null)), ExtractOptions::default());
        assert_eq!(options_from_value(json!([false])), ExtractOptions::default());
        assert_eq!(options_from_value(json!("off")), ExtractOptions::default());
    }

    #[test]
    fn test_only_booleans_taken_literally() {
        let options = options_from_json(
            r#"{"dialogueAttribution": "yes", "frequencyAnalysis": false, "titleDetection": 0}"#,
        )
        .unwrap();
        let expected = ExtractOptions::default().without(Stage::FrequencyAnalysis);
        assert_eq!(options, expected);
    }

    #[test]
    fn test_broken_json_is_an_error() {
        assert!(options_from_json("{not json").is_err());
    }

    #[test]
    fn test_disable_stages() {
        let options = disable_stages(
            ExtractOptions::default(),
            &[Stage::PossessiveFormDetection, Stage::FilterCommonWords],
        );
        assert!(!options.possessive_form_detection);
        assert!(!options.filter_common_words);
        assert!(options.dialogue_attribution);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_options(Path::new("/nonexistent/options.json")).unwrap_err();
        assert!(matches!(err, ExtractError::ReadOptions { .. }));
    }
}

//! JSON Schema validation helpers
//!
//! Checks that a generated schema accepts the sample it was generated from.
//! This module is gated by the `schema-validation` feature.

use jsonschema::Validator;
use serde_json::Value;

use crate::generator::{GeneratorConfig, GeneratorError, SchemaGenerator, to_json_schema};

/// Format validation error with path information
fn format_validation_error(error: &jsonschema::ValidationError) -> String {
    let path_str = error.instance_path().to_string();
    let path_str = if path_str == "/" || path_str.is_empty() {
        "root".to_string()
    } else {
        path_str
    };

    format!("validation failed at path '{}': {}", path_str, error)
}

/// Validate a sample document against a schema document
pub fn validate_sample(schema: &Value, sample: &Value) -> Result<(), String> {
    let validator =
        Validator::new(schema).map_err(|e| format!("Failed to compile schema: {}", e))?;

    if let Err(error) = validator.validate(sample) {
        return Err(format_validation_error(&error));
    }

    Ok(())
}

/// Generate a schema for `json` and confirm the sample validates against it
pub fn generate_and_check(json: &str, config: &GeneratorConfig) -> Result<Value, GeneratorError> {
    let sample: Value = serde_json::from_str(json)?;
    let mut generator = SchemaGenerator::with_config(config.clone());
    let root = generator.generate_value(&sample)?;
    let schema = to_json_schema(&root, config);

    validate_sample(&schema, &sample).map_err(GeneratorError::Validation)?;
    Ok(schema)
}

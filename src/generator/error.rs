//! Error types for schema generation

use thiserror::Error;

/// Errors that can occur while generating a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Malformed input text
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// Invalid caller option (bad enum value, wrong option type)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A decoded value could not be mapped to a schema kind
    #[error("Type inference error: {0}")]
    TypeInference(String),

    /// A sample did not validate against its generated schema
    #[error("Schema validation error: {0}")]
    Validation(String),

    /// The schema tree could not be rendered to text
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(e: serde_json::Error) -> Self {
        GeneratorError::Decode(e.to_string())
    }
}

impl From<serde_yaml::Error> for GeneratorError {
    fn from(e: serde_yaml::Error) -> Self {
        GeneratorError::Serialize(e.to_string())
    }
}

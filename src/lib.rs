//! JSON Schema Generator - infer JSON Schema documents from sample payloads
//!
//! Provides:
//! - Schema inference from a single JSON document
//! - Configurable required-field policy and array item collection
//! - Path-derived `$id` assignment
//! - Round-trip validation of samples against their schema (`schema-validation`)
//! - The `json-schema-gen` command line tool (`cli`)

pub mod cli;
pub mod generator;
#[cfg(feature = "schema-validation")]
pub mod validation;

// Re-export commonly used types
pub use generator::{
    GeneratorConfig, GeneratorConfigBuilder, GeneratorError, ItemsCollectMode, OutputStyle,
    SchemaGenerator, SchemaKind, SchemaNode, generate, generate_from_value,
    generate_with_options,
};
#[cfg(feature = "schema-validation")]
pub use validation::{generate_and_check, validate_sample};

//! Schema generation from sample JSON documents
//!
//! This module infers a draft-04 JSON Schema describing one sample JSON
//! document.
//!
//! ## Features
//!
//! - **Type inference** - Classify every value as object, array, string,
//!   integer, number, boolean or null
//! - **Array item collection** - Deduplicated `anyOf` alternatives or a
//!   positional list of item schemas
//! - **Required fields** - Every observed property, or only named ones
//! - **Identifiers** - Path-derived `$id` values below a configured root id
//!
//! ## Example
//!
//! ```rust
//! use json_schema_generator::generator::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig::builder()
//!     .schema_id("http://foo.bar/schema")
//!     .build();
//!
//! let schema = generate(r#"{"phoneNumber": [{"number": "555"}]}"#, &config)?;
//! assert!(schema.contains(r#""$id":"http://foo.bar/schema/phoneNumber""#));
//! # Ok::<(), json_schema_generator::generator::GeneratorError>(())
//! ```

mod config;
mod error;
mod inferrer;
mod merge;
mod render;
mod types;

use serde_json::Value;

pub use config::{DRAFT_04_SCHEMA_URI, GeneratorConfig, GeneratorConfigBuilder, ItemsCollectMode};
pub use error::GeneratorError;
pub use inferrer::{InferenceStats, SchemaGenerator, classify};
pub use merge::ItemAlternatives;
pub use render::{OutputStyle, render, to_json_schema};
pub use types::{ItemsSchema, SchemaKind, SchemaNode};

/// Generate compact schema text for JSON text
pub fn generate(json: &str, config: &GeneratorConfig) -> Result<String, GeneratorError> {
    generate_styled(json, config, OutputStyle::Compact)
}

/// Generate schema text for JSON text in the given output style
pub fn generate_styled(
    json: &str,
    config: &GeneratorConfig,
    style: OutputStyle,
) -> Result<String, GeneratorError> {
    let mut generator = SchemaGenerator::with_config(config.clone());
    let root = generator.generate_json(json)?;
    render(&root, config, style)
}

/// Generate compact schema text, taking options as a caller options map.
///
/// Options are validated before the input is decoded.
pub fn generate_with_options(json: &str, options: &Value) -> Result<String, GeneratorError> {
    let config = GeneratorConfig::from_options(options)?;
    generate(json, &config)
}

/// Generate the schema document of an already decoded value
pub fn generate_from_value(
    value: &Value,
    config: &GeneratorConfig,
) -> Result<Value, GeneratorError> {
    let mut generator = SchemaGenerator::with_config(config.clone());
    let root = generator.generate_value(value)?;
    Ok(to_json_schema(&root, config))
}

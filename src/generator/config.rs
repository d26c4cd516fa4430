//! Configuration for schema generation

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::GeneratorError;

/// `$schema` URI written on the root node unless overridden
pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// How the schemas of array elements are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemsCollectMode {
    /// One schema per element, rendered as a positional `items` list
    AsList,
    /// Structurally distinct element schemas, rendered as `items.anyOf`
    #[default]
    AsAnyOf,
}

impl ItemsCollectMode {
    /// Option value as it appears in an options map
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemsCollectMode::AsList => "AS_LIST",
            ItemsCollectMode::AsAnyOf => "AS_ANY_OF",
        }
    }

    /// Accepts `AS_LIST` / `AS_ANY_OF` in any case, with `-` or `_` separators
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "AS_LIST" => Ok(ItemsCollectMode::AsList),
            "AS_ANY_OF" => Ok(ItemsCollectMode::AsAnyOf),
            _ => Err(format!(
                "invalid items_schema_collect_mode `{}`, expected `AS_LIST` or `AS_ANY_OF`",
                s
            )),
        }
    }
}

impl fmt::Display for ItemsCollectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemsCollectMode {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(GeneratorError::Configuration)
    }
}

impl<'de> Deserialize<'de> for ItemsCollectMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Configuration for schema generation
///
/// Field names double as the keys of a caller options map, see
/// [`GeneratorConfig::from_options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root `$id`; descendants extend it with `/<segment>`
    pub schema_id: Option<String>,

    /// Root `title`
    pub schema_title: Option<String>,

    /// Root `description`
    pub schema_description: Option<String>,

    /// Root `$schema` URI
    pub schema_uri: String,

    /// Array element combination strategy
    pub items_schema_collect_mode: ItemsCollectMode,

    /// Mark every observed property as required
    pub properties_required_by_default: bool,

    /// Property names required at every level where they appear
    pub schema_required_field_names: BTreeSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_id: None,
            schema_title: None,
            schema_description: None,
            schema_uri: DRAFT_04_SCHEMA_URI.to_string(),
            items_schema_collect_mode: ItemsCollectMode::AsAnyOf,
            properties_required_by_default: true,
            schema_required_field_names: BTreeSet::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parse a caller options map.
    ///
    /// Unknown keys are ignored and `null` values fall back to the default.
    /// Anything else that does not fit an option's type, including an
    /// `items_schema_collect_mode` outside its closed set, is a
    /// [`GeneratorError::Configuration`].
    pub fn from_options(options: &Value) -> Result<Self, GeneratorError> {
        let map = match options {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(GeneratorError::Configuration(format!(
                    "options must be an object, found {}",
                    value_type_name(other)
                )));
            }
        };

        let present: serde_json::Map<String, Value> = map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let config: GeneratorConfig = serde_json::from_value(Value::Object(present))
            .map_err(|e| GeneratorError::Configuration(e.to_string()))?;

        Ok(config.normalized())
    }

    /// Parse a caller options map from JSON text
    pub fn from_options_str(options: &str) -> Result<Self, GeneratorError> {
        let value: Value = serde_json::from_str(options)
            .map_err(|e| GeneratorError::Configuration(format!("invalid options JSON: {}", e)))?;
        Self::from_options(&value)
    }

    /// Root identifier, if one is configured
    pub fn root_id(&self) -> Option<&str> {
        self.schema_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Whether a property with this name belongs in its object's `required` list
    pub fn is_required(&self, name: &str) -> bool {
        self.properties_required_by_default || self.schema_required_field_names.contains(name)
    }

    fn normalized(mut self) -> Self {
        self.schema_id = self.schema_id.filter(|id| !id.is_empty());
        if self.schema_uri.is_empty() {
            self.schema_uri = DRAFT_04_SCHEMA_URI.to_string();
        }
        self
    }
}

/// Builder for GeneratorConfig
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Set the root `$id`
    pub fn schema_id(mut self, id: impl Into<String>) -> Self {
        self.config.schema_id = Some(id.into());
        self
    }

    /// Set the root `title`
    pub fn schema_title(mut self, title: impl Into<String>) -> Self {
        self.config.schema_title = Some(title.into());
        self
    }

    /// Set the root `description`
    pub fn schema_description(mut self, description: impl Into<String>) -> Self {
        self.config.schema_description = Some(description.into());
        self
    }

    /// Override the root `$schema` URI
    pub fn schema_uri(mut self, uri: impl Into<String>) -> Self {
        self.config.schema_uri = uri.into();
        self
    }

    /// Set the array element combination strategy
    pub fn items_schema_collect_mode(mut self, mode: ItemsCollectMode) -> Self {
        self.config.items_schema_collect_mode = mode;
        self
    }

    /// Set whether all observed properties are required
    pub fn properties_required_by_default(mut self, required: bool) -> Self {
        self.config.properties_required_by_default = required;
        self
    }

    /// Add a property name that is always required
    pub fn required_field_name(mut self, name: impl Into<String>) -> Self {
        self.config.schema_required_field_names.insert(name.into());
        self
    }

    /// Add several always-required property names
    pub fn required_field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .schema_required_field_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> GeneratorConfig {
        self.config.normalized()
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
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
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.schema_id, None);
        assert_eq!(config.schema_uri, DRAFT_04_SCHEMA_URI);
        assert_eq!(config.items_schema_collect_mode, ItemsCollectMode::AsAnyOf);
        assert!(config.properties_required_by_default);
        assert!(config.schema_required_field_names.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::builder()
            .schema_id("http://foo.bar/schema")
            .schema_title("Address")
            .items_schema_collect_mode(ItemsCollectMode::AsList)
            .properties_required_by_default(false)
            .required_field_names(["barAddress", "city"])
            .build();

        assert_eq!(config.root_id(), Some("http://foo.bar/schema"));
        assert_eq!(config.schema_title.as_deref(), Some("Address"));
        assert_eq!(config.items_schema_collect_mode, ItemsCollectMode::AsList);
        assert!(!config.properties_required_by_default);
        assert_eq!(config.schema_required_field_names.len(), 2);
    }

    #[test]
    fn test_empty_schema_id_is_omitted() {
        let config = GeneratorConfig::builder().schema_id("").build();
        assert_eq!(config.schema_id, None);
        assert_eq!(config.root_id(), None);
    }

    #[test]
    fn test_from_options() {
        let config = GeneratorConfig::from_options(&json!({
            "schema_id": "http://bar.foo/schema2",
            "schema_title": "coucouc",
            "schema_description": "desc",
            "items_schema_collect_mode": "AS_LIST",
            "properties_required_by_default": false,
            "schema_required_field_names": ["barAddress"]
        }))
        .unwrap();

        assert_eq!(config.root_id(), Some("http://bar.foo/schema2"));
        assert_eq!(config.schema_title.as_deref(), Some("coucouc"));
        assert_eq!(config.schema_description.as_deref(), Some("desc"));
        assert_eq!(config.items_schema_collect_mode, ItemsCollectMode::AsList);
        assert!(!config.properties_required_by_default);
        assert!(config.schema_required_field_names.contains("barAddress"));
    }

    #[test]
    fn test_from_options_ignores_unknown_keys_and_nulls() {
        let config = GeneratorConfig::from_options(&json!({
            "colour": "blue",
            "schema_id": null,
            "properties_required_by_default": null
        }))
        .unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_options_rejects_unknown_mode() {
        let err = GeneratorConfig::from_options(&json!({
            "items_schema_collect_mode": "AS_SET"
        }))
        .unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(_)));
    }

    #[test]
    fn test_from_options_accepts_mode_spellings_like_from_str() {
        for (raw, expected) in [
            ("as_list", ItemsCollectMode::AsList),
            ("as-any-of", ItemsCollectMode::AsAnyOf),
            ("As_List", ItemsCollectMode::AsList),
        ] {
            let config = GeneratorConfig::from_options(&json!({
                "items_schema_collect_mode": raw
            }))
            .unwrap();
            assert_eq!(config.items_schema_collect_mode, expected);
            assert_eq!(raw.parse::<ItemsCollectMode>().unwrap(), expected);
        }
    }

    #[test]
    fn test_from_options_rejects_non_object() {
        let err = GeneratorConfig::from_options(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(_)));
        assert!(GeneratorConfig::from_options(&Value::Null).is_ok());
    }

    #[test]
    fn test_from_options_str() {
        let config =
            GeneratorConfig::from_options_str(r#"{"items_schema_collect_mode":"AS_ANY_OF"}"#)
                .unwrap();
        assert_eq!(config.items_schema_collect_mode, ItemsCollectMode::AsAnyOf);

        let err = GeneratorConfig::from_options_str("{not json").unwrap_err();
        assert!(matches!(err, GeneratorError::Configuration(_)));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "as-list".parse::<ItemsCollectMode>().unwrap(),
            ItemsCollectMode::AsList
        );
        assert_eq!(
            "AS_ANY_OF".parse::<ItemsCollectMode>().unwrap(),
            ItemsCollectMode::AsAnyOf
        );
        assert!("tuple".parse::<ItemsCollectMode>().is_err());
    }

    #[test]
    fn test_is_required() {
        let config = GeneratorConfig::default();
        assert!(config.is_required("anything"));

        let config = GeneratorConfig::builder()
            .properties_required_by_default(false)
            .required_field_name("x")
            .build();
        assert!(config.is_required("x"));
        assert!(!config.is_required("y"));
    }
}

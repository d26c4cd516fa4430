//! Rendering of schema trees to JSON Schema documents

use serde_json::{Map, Value, json};

use super::config::GeneratorConfig;
use super::error::GeneratorError;
use super::types::{ItemsSchema, SchemaKind, SchemaNode};

/// Text layout of a rendered schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
    /// YAML
    Yaml,
}

/// Convert a schema tree to a JSON Schema document.
///
/// Root-only keywords (`$schema`, `title`, `description`) come from the
/// configuration; every node renders `$id`, `type`, `required`,
/// `properties` and `items` in that order.
pub fn to_json_schema(root: &SchemaNode, config: &GeneratorConfig) -> Value {
    let mut schema = Map::new();
    schema.insert("$schema".to_string(), json!(config.schema_uri));

    if let Some(ref id) = root.id {
        schema.insert("$id".to_string(), json!(id));
    }
    if let Some(ref title) = config.schema_title {
        schema.insert("title".to_string(), json!(title));
    }
    if let Some(ref description) = config.schema_description {
        schema.insert("description".to_string(), json!(description));
    }

    node_body(root, &mut schema);
    Value::Object(schema)
}

/// Render a schema tree to text
pub fn render(
    root: &SchemaNode,
    config: &GeneratorConfig,
    style: OutputStyle,
) -> Result<String, GeneratorError> {
    let schema = to_json_schema(root, config);
    let text = match style {
        OutputStyle::Compact => serde_json::to_string(&schema),
        OutputStyle::Pretty => serde_json::to_string_pretty(&schema),
        OutputStyle::Yaml => return Ok(serde_yaml::to_string(&schema)?),
    };
    text.map_err(|e| GeneratorError::Serialize(e.to_string()))
}

fn node_to_json_schema(node: &SchemaNode) -> Value {
    let mut schema = Map::new();
    if let Some(ref id) = node.id {
        schema.insert("$id".to_string(), json!(id));
    }
    node_body(node, &mut schema);
    Value::Object(schema)
}

fn node_body(node: &SchemaNode, schema: &mut Map<String, Value>) {
    schema.insert("type".to_string(), json!(node.kind.type_name()));

    match node.kind {
        SchemaKind::Object => {
            if !node.required.is_empty() {
                schema.insert("required".to_string(), json!(node.required));
            }
            if !node.properties.is_empty() {
                let properties: Map<String, Value> = node
                    .properties
                    .iter()
                    .map(|(name, child)| (name.clone(), node_to_json_schema(child)))
                    .collect();
                schema.insert("properties".to_string(), Value::Object(properties));
            }
        }
        SchemaKind::Array => {
            let items = match &node.items {
                Some(ItemsSchema::List(nodes)) => {
                    Value::Array(nodes.iter().map(node_to_json_schema).collect())
                }
                Some(ItemsSchema::AnyOf(alternatives)) => {
                    let any_of: Vec<Value> = alternatives.iter().map(node_to_json_schema).collect();
                    json!({ "anyOf": any_of })
                }
                // Empty schema accepts anything
                Some(ItemsSchema::Unconstrained) | None => json!({}),
            };
            schema.insert("items".to_string(), items);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::config::ItemsCollectMode;
    use crate::generator::inferrer::SchemaGenerator;

    fn schema_for(json: &str, config: GeneratorConfig) -> Value {
        let mut generator = SchemaGenerator::with_config(config.clone());
        let root = generator.generate_json(json).unwrap();
        to_json_schema(&root, &config)
    }

    #[test]
    fn test_basic_fixture_is_byte_exact() {
        let config = GeneratorConfig::default();
        let mut generator = SchemaGenerator::with_config(config.clone());
        let root = generator.generate_json(r#"{"a":{"b":2}}"#).unwrap();
        let text = render(&root, &config, OutputStyle::Compact).unwrap();
        assert_eq!(
            text,
            r#"{"$schema":"http://json-schema.org/draft-04/schema#","type":"object","required":["a"],"properties":{"a":{"type":"object","required":["b"],"properties":{"b":{"type":"integer"}}}}}"#
        );
    }

    #[test]
    fn test_root_keywords_order() {
        let config = GeneratorConfig::builder()
            .schema_id("http://foo.bar")
            .schema_title("T")
            .schema_description("D")
            .build();
        let schema = schema_for(r#"{"k":true}"#, config);
        let keys: Vec<_> = schema.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "$schema",
                "$id",
                "title",
                "description",
                "type",
                "required",
                "properties"
            ]
        );
        assert_eq!(schema["properties"]["k"]["$id"], "http://foo.bar/k");
        assert!(schema["properties"]["k"].get("title").is_none());
    }

    #[test]
    fn test_empty_containers() {
        let schema = schema_for("{}", GeneratorConfig::default());
        assert_eq!(schema["type"], "object");
        assert!(schema.get("properties").is_none());
        assert!(schema.get("required").is_none());

        for mode in [ItemsCollectMode::AsAnyOf, ItemsCollectMode::AsList] {
            let config = GeneratorConfig::builder()
                .items_schema_collect_mode(mode)
                .build();
            let schema = schema_for("[]", config);
            assert_eq!(schema["type"], "array");
            assert_eq!(schema["items"], json!({}));
        }
    }

    #[test]
    fn test_single_alternative_stays_in_any_of() {
        let schema = schema_for(r#"[3, 4, 5]"#, GeneratorConfig::default());
        assert_eq!(schema["items"], json!({"anyOf": [{"type": "integer"}]}));
    }

    #[test]
    fn test_list_mode_renders_array() {
        let config = GeneratorConfig::builder()
            .items_schema_collect_mode(ItemsCollectMode::AsList)
            .build();
        let schema = schema_for(r#"[3, "x"]"#, config);
        assert_eq!(
            schema["items"],
            json!([{"type": "integer"}, {"type": "string"}])
        );
    }

    #[test]
    fn test_required_omitted_when_empty() {
        let config = GeneratorConfig::builder()
            .properties_required_by_default(false)
            .build();
        let schema = schema_for(r#"{"a":{"b":1}}"#, config);
        assert!(schema.get("required").is_none());
        assert!(schema["properties"]["a"].get("required").is_none());
    }

    #[test]
    fn test_yaml_output() {
        let config = GeneratorConfig::default();
        let mut generator = SchemaGenerator::with_config(config.clone());
        let root = generator.generate_json(r#"{"a":1}"#).unwrap();
        let yaml = render(&root, &config, OutputStyle::Yaml).unwrap();
        assert!(yaml.contains("type: object"));
        assert!(yaml.contains("- a"));
    }
}

//! Schema inference engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, trace};

use super::config::{GeneratorConfig, ItemsCollectMode};
use super::error::GeneratorError;
use super::merge::ItemAlternatives;
use super::types::{ItemsSchema, SchemaKind, SchemaNode};

/// Statistics from the last generation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Values visited in the input document
    pub values_visited: usize,
    /// Visited values per schema type name
    pub kind_counts: BTreeMap<String, usize>,
    /// Deepest nesting level reached (root = 0)
    pub max_depth: usize,
    /// Array elements folded into an existing `anyOf` alternative
    pub alternatives_collapsed: usize,
}

/// Schema inference engine
///
/// Walks one decoded JSON document and builds its [`SchemaNode`] tree.
/// Each call is independent; only the statistics of the last call are kept.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    config: GeneratorConfig,
    stats: InferenceStats,
}

impl SchemaGenerator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a new generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            stats: InferenceStats::default(),
        }
    }

    /// Decode JSON text and infer its schema tree
    pub fn generate_json(&mut self, json: &str) -> Result<SchemaNode, GeneratorError> {
        let value: Value = serde_json::from_str(json)?;
        self.generate_value(&value)
    }

    /// Infer the schema tree of a decoded JSON value
    pub fn generate_value(&mut self, value: &Value) -> Result<SchemaNode, GeneratorError> {
        self.stats = InferenceStats::default();
        debug!(
            mode = %self.config.items_schema_collect_mode,
            root_id = self.config.root_id().unwrap_or(""),
            "Generating schema"
        );

        let root_id = self.config.root_id().map(str::to_string);
        let root = self.infer(value, root_id, 0)?;

        debug!(
            values = self.stats.values_visited,
            max_depth = self.stats.max_depth,
            collapsed = self.stats.alternatives_collapsed,
            "Schema generated"
        );
        Ok(root)
    }

    /// Statistics of the last generation pass
    pub fn stats(&self) -> &InferenceStats {
        &self.stats
    }

    fn infer(
        &mut self,
        value: &Value,
        id: Option<String>,
        depth: usize,
    ) -> Result<SchemaNode, GeneratorError> {
        let kind = classify(value)?;

        self.stats.values_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        *self
            .stats
            .kind_counts
            .entry(kind.type_name().to_string())
            .or_insert(0) += 1;

        let mut node = SchemaNode::new(kind, id);

        match value {
            Value::Object(members) => {
                for (name, member) in members {
                    let child_id = child_id(node.id.as_deref(), name);
                    let child = self.infer(member, child_id, depth + 1)?;
                    node.properties.insert(name.clone(), child);
                }
                node.required = node
                    .properties
                    .keys()
                    .filter(|name| self.config.is_required(name))
                    .cloned()
                    .collect();
            }
            Value::Array(elements) => {
                node.items = Some(self.infer_items(elements, node.id.as_deref(), depth)?);
            }
            _ => {}
        }

        Ok(node)
    }

    fn infer_items(
        &mut self,
        elements: &[Value],
        parent_id: Option<&str>,
        depth: usize,
    ) -> Result<ItemsSchema, GeneratorError> {
        if elements.is_empty() {
            return Ok(ItemsSchema::Unconstrained);
        }

        let mut children = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let child_id = child_id(parent_id, &index.to_string());
            children.push(self.infer(element, child_id, depth + 1)?);
        }

        match self.config.items_schema_collect_mode {
            ItemsCollectMode::AsList => Ok(ItemsSchema::List(children)),
            ItemsCollectMode::AsAnyOf => {
                let mut alternatives = ItemAlternatives::new();
                for child in children {
                    let kind = child.kind;
                    if !alternatives.insert(child) {
                        self.stats.alternatives_collapsed += 1;
                        trace!(
                            parent = parent_id.unwrap_or(""),
                            kind = kind.type_name(),
                            "Collapsed duplicate item schema"
                        );
                    }
                }
                Ok(ItemsSchema::AnyOf(alternatives))
            }
        }
    }
}

/// Map a decoded value to its schema kind
pub fn classify(value: &Value) -> Result<SchemaKind, GeneratorError> {
    Ok(match value {
        Value::Null => SchemaKind::Null,
        Value::Bool(_) => SchemaKind::Boolean,
        Value::Number(n) => classify_number(n)?,
        Value::String(_) => SchemaKind::String,
        Value::Array(_) => SchemaKind::Array,
        Value::Object(_) => SchemaKind::Object,
    })
}

fn classify_number(n: &Number) -> Result<SchemaKind, GeneratorError> {
    if n.is_i64() {
        Ok(SchemaKind::Integer)
    } else if n.as_f64().is_some() {
        Ok(SchemaKind::Number)
    } else {
        Err(GeneratorError::TypeInference(format!(
            "number `{}` is neither integral nor representable as a float",
            n
        )))
    }
}

/// Extend a parent id by one segment, escaped as a JSON Pointer token
fn child_id(parent: Option<&str>, segment: &str) -> Option<String> {
    parent.map(|id| format!("{}/{}", id, escape_segment(segment)))
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

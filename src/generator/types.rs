//! Schema node data model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::merge::ItemAlternatives;

/// JSON Schema type of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl SchemaKind {
    /// Get the JSON Schema type name
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::String => "string",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Null => "null",
        }
    }
}

/// Element schemas of an array node
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsSchema {
    /// No elements were observed, so any item is allowed
    Unconstrained,
    /// One schema per element, in element order
    List(Vec<SchemaNode>),
    /// Structurally distinct element schemas, in first-seen order
    AnyOf(ItemAlternatives),
}

impl ItemsSchema {
    /// Number of child schemas held
    pub fn len(&self) -> usize {
        match self {
            ItemsSchema::Unconstrained => 0,
            ItemsSchema::List(nodes) => nodes.len(),
            ItemsSchema::AnyOf(alternatives) => alternatives.len(),
        }
    }

    /// True when no child schema is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One inferred point of the sample document's structure
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Schema type
    pub kind: SchemaKind,
    /// Path-derived identifier, absent when no root id is configured
    pub id: Option<String>,
    /// Object members in encounter order
    pub properties: IndexMap<String, SchemaNode>,
    /// Required property names, in property order
    pub required: Vec<String>,
    /// Element schemas (array nodes only)
    pub items: Option<ItemsSchema>,
}

impl SchemaNode {
    /// Create a childless node
    pub fn new(kind: SchemaKind, id: Option<String>) -> Self {
        Self {
            kind,
            id,
            properties: IndexMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    /// Get a direct property by name
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.get(name)
    }

    /// Follow a chain of property names from this node
    pub fn find(&self, path: &[&str]) -> Option<&SchemaNode> {
        path.iter()
            .try_fold(self, |node, name| node.properties.get(*name))
    }

    /// Whether `name` is in this node's required list
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

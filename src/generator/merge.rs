//! Structural equality of schema nodes
//!
//! Array elements in `anyOf` mode are folded into a set of alternatives
//! where two nodes count as the same alternative when their rendered shape
//! matches: kind, property keys with recursively equal children, required
//! names and items. Identifiers never take part in the comparison.

use std::hash::{DefaultHasher, Hash, Hasher};

use super::types::{ItemsSchema, SchemaNode};

impl SchemaNode {
    /// Compare the shape of two nodes, ignoring identifiers and member order
    pub fn same_shape(&self, other: &SchemaNode) -> bool {
        if self.kind != other.kind
            || self.properties.len() != other.properties.len()
            || self.required.len() != other.required.len()
        {
            return false;
        }

        let properties_match = self.properties.iter().all(|(name, child)| {
            other
                .properties
                .get(name)
                .is_some_and(|theirs| child.same_shape(theirs))
        });
        if !properties_match {
            return false;
        }

        if !self.required.iter().all(|name| other.is_required(name)) {
            return false;
        }

        match (&self.items, &other.items) {
            (None, None) => true,
            (Some(a), Some(b)) => items_same_shape(a, b),
            _ => false,
        }
    }

    /// Hash of the node's shape; equal shapes always hash equal
    pub fn shape_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.kind.hash(&mut hasher);

        let mut members: Vec<(&String, u64)> = self
            .properties
            .iter()
            .map(|(name, child)| (name, child.shape_hash()))
            .collect();
        members.sort();
        members.hash(&mut hasher);

        let mut required: Vec<&String> = self.required.iter().collect();
        required.sort();
        required.hash(&mut hasher);

        match &self.items {
            None => 0u8.hash(&mut hasher),
            Some(ItemsSchema::Unconstrained) => 1u8.hash(&mut hasher),
            Some(ItemsSchema::List(nodes)) => {
                2u8.hash(&mut hasher);
                for node in nodes {
                    node.shape_hash().hash(&mut hasher);
                }
            }
            Some(ItemsSchema::AnyOf(alternatives)) => {
                3u8.hash(&mut hasher);
                let mut hashes = alternatives.hashes();
                hashes.sort_unstable();
                hashes.hash(&mut hasher);
            }
        }

        hasher.finish()
    }
}

fn items_same_shape(a: &ItemsSchema, b: &ItemsSchema) -> bool {
    match (a, b) {
        (ItemsSchema::Unconstrained, ItemsSchema::Unconstrained) => true,
        (ItemsSchema::List(xs), ItemsSchema::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x.same_shape(y))
        }
        (ItemsSchema::AnyOf(xs), ItemsSchema::AnyOf(ys)) => xs.same_set(ys),
        _ => false,
    }
}

/// Ordered set of structurally distinct schema nodes
///
/// Each entry keeps its shape hash so that most comparisons stop at the
/// hash; the full recursive comparison only runs on hash matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemAlternatives {
    entries: Vec<(u64, SchemaNode)>,
}

impl ItemAlternatives {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node unless a node of the same shape is already present.
    ///
    /// Returns `true` when the node was added.
    pub fn insert(&mut self, node: SchemaNode) -> bool {
        let hash = node.shape_hash();
        if self.contains_shape(hash, &node) {
            return false;
        }
        self.entries.push((hash, node));
        true
    }

    fn contains_shape(&self, hash: u64, node: &SchemaNode) -> bool {
        self.entries
            .iter()
            .any(|(h, existing)| *h == hash && existing.same_shape(node))
    }

    /// Number of distinct alternatives
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no alternative has been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alternatives in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &SchemaNode> {
        self.entries.iter().map(|(_, node)| node)
    }

    fn hashes(&self) -> Vec<u64> {
        self.entries.iter().map(|(h, _)| *h).collect()
    }

    /// Order-insensitive shape comparison of two sets
    pub fn same_set(&self, other: &ItemAlternatives) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(h, node)| other.contains_shape(*h, node))
    }
}

impl FromIterator<SchemaNode> for ItemAlternatives {
    fn from_iter<I: IntoIterator<Item = SchemaNode>>(iter: I) -> Self {
        let mut set = ItemAlternatives::new();
        for node in iter {
            set.insert(node);
        }
        set
    }
}

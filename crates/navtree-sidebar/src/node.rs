//! Navigation tree nodes.
//!
//! A sidebar is an ordered sequence of [`NavNode`] values. Each node is
//! either a reference to a single document or a labeled category holding
//! further nodes.
//!
//! Nodes serialize to the canonical tagged shape:
//!
//! ```json
//! { "type": "doc", "id": "intro", "label": "Introduction" }
//! { "type": "category", "label": "Tutorials", "items": ["tutorials/mcp"] }
//! ```
//!
//! When parsing, a bare string is accepted as shorthand for a doc reference
//! without a label. Bare integers (an unquoted `- 404` in YAML) are read as
//! the same shorthand.

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a single document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRef {
    /// Document identifier (e.g., "intro", "tutorials/mcp").
    ///
    /// Opaque to this crate; the site generator resolves it.
    pub id: String,
    /// Sidebar label overriding the document's own title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocRef {
    /// Create a doc reference without a label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// Labeled group of nested nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Child nodes in display order.
    #[serde(default)]
    pub items: Vec<NavNode>,
}

/// Node in a sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    /// Leaf node pointing at a document.
    Doc(DocRef),
    /// Grouping node with children.
    Category(Category),
}

impl NavNode {
    /// Create a doc node without a label.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(DocRef::new(id))
    }

    /// Create a doc node with a sidebar label.
    #[must_use]
    pub fn labeled_doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Doc(DocRef {
            id: id.into(),
            label: Some(label.into()),
        })
    }

    /// Create a category node.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self::Category(Category {
            label: label.into(),
            items,
        })
    }
}

/// Object form of a node, dispatched on the `type` field.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedNode {
    Doc(DocRef),
    Category(Category),
}

impl From<TaggedNode> for NavNode {
    fn from(node: TaggedNode) -> Self {
        match node {
            TaggedNode::Doc(doc) => Self::Doc(doc),
            TaggedNode::Category(category) => Self::Category(category),
        }
    }
}

impl<'de> Deserialize<'de> for NavNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = NavNode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a doc id string or an object with a `type` field")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NavNode, E> {
                Ok(NavNode::doc(value))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<NavNode, E> {
                Ok(NavNode::doc(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<NavNode, E> {
                Ok(NavNode::doc(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<NavNode, E> {
                Ok(NavNode::doc(value.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<NavNode, A::Error> {
                TaggedNode::deserialize(MapAccessDeserializer::new(map)).map(NavNode::from)
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

//! ADF node and mark definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in an Atlassian Document Format tree.
///
/// The schema is open: `node_type` is a free-form string and unknown types
/// are still structurally valid. All fields default so that any JSON object
/// decodes into a `Node`, matching the leniency of the upstream wire format
/// (absent fields are simply empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node type discriminator (`text`, `paragraph`, `heading`, ...).
    #[serde(rename = "type", default)]
    pub node_type: String,

    /// Child nodes, order-significant. Empty for leaf nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,

    /// Text payload. Only meaningful on `text` nodes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Inline formatting marks. Only meaningful on `text` nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,

    /// Node-specific attributes (heading level, link href, image src, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            node_type: "text".to_string(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Creates a container node of the given type with children.
    pub fn container(node_type: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            node_type: node_type.into(),
            content,
            ..Default::default()
        }
    }

    /// Adds marks to this node (builder style).
    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    /// Sets an attribute on this node (builder style).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Returns a string attribute, if present and actually a string.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Returns a numeric attribute, if present and actually a number.
    ///
    /// Heading levels arrive as JSON numbers that may be integral or
    /// floating depending on the producer, so everything is read as f64.
    pub fn attr_number(&self, key: &str) -> Option<f64> {
        self.attrs.get(key).and_then(Value::as_f64)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.content.is_empty()
    }
}

/// An inline formatting mark attached to a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type discriminator.
    #[serde(rename = "type")]
    pub mark_type: MarkType,
}

impl Mark {
    /// Creates a mark of the given type.
    pub fn new(mark_type: MarkType) -> Self {
        Self { mark_type }
    }

    /// Bold mark.
    pub fn strong() -> Self {
        Self::new(MarkType::Strong)
    }

    /// Italic mark.
    pub fn em() -> Self {
        Self::new(MarkType::Em)
    }

    /// Inline code mark.
    pub fn code() -> Self {
        Self::new(MarkType::Code)
    }
}

/// Recognized mark kinds. Anything else decodes to `Other` and renders as a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkType {
    /// Bold (`**text**`)
    Strong,
    /// Italic (`*text*`)
    Em,
    /// Inline code (`` `text` ``)
    Code,
    /// Unrecognized mark type
    #[serde(other)]
    Other,
}

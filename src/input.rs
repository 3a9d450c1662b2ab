//! Input classification for loosely-typed description payloads.
//!
//! Issue-tracker APIs return a description field that may be `null`, an
//! already-rendered string, or an ADF tree. Classification happens once at
//! the boundary; everything downstream operates on the [`Input::Tree`]
//! variant only.

use crate::model::Node;
use serde::Deserialize;
use serde_json::Value;

/// A classified conversion input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// No content (`null`, `""`, or the literal string `"null"`).
    Empty,
    /// Already-rendered or unrecognizable content, passed through verbatim.
    Raw(String),
    /// A decoded ADF tree.
    Tree(Box<Node>),
}

impl Input {
    /// Classifies a JSON value into a conversion input.
    ///
    /// Decode failures are not errors: anything that is not `null`, a
    /// string, or an object-shaped tree degrades to [`Input::Raw`] carrying
    /// the re-serialized value.
    pub fn classify(value: &Value) -> Input {
        match value {
            Value::Null => Input::Empty,
            Value::String(s) => {
                if s.is_empty() || s == "null" {
                    Input::Empty
                } else {
                    Input::Raw(s.clone())
                }
            }
            // Deserializing from the borrowed value avoids copying the
            // whole tree just to decode it.
            other => match Node::deserialize(other) {
                Ok(node) => Input::Tree(Box::new(node)),
                Err(_) => Input::Raw(other.to_string()),
            },
        }
    }

    /// Returns true if this input carries no renderable content.
    pub fn is_empty(&self) -> bool {
        matches!(self, Input::Empty)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Empty => write!(f, "empty"),
            Input::Raw(_) => write!(f, "raw string"),
            Input::Tree(_) => write!(f, "ADF tree"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_null() {
        assert_eq!(Input::classify(&Value::Null), Input::Empty);
    }

    #[test]
    fn test_classify_empty_string() {
        assert_eq!(Input::classify(&json!("")), Input::Empty);
    }

    #[test]
    fn test_classify_null_literal_string() {
        // Some payloads carry the string "null" rather than JSON null.
        assert_eq!(Input::classify(&json!("null")), Input::Empty);
    }

    #[test]
    fn test_classify_plain_string() {
        assert_eq!(
            Input::classify(&json!("already markdown")),
            Input::Raw("already markdown".to_string())
        );
    }

    #[test]
    fn test_classify_tree() {
        let input = Input::classify(&json!({
            "type": "doc",
            "content": [{"type": "paragraph"}]
        }));

        match input {
            Input::Tree(node) => {
                assert_eq!(node.node_type, "doc");
                assert_eq!(node.content.len(), 1);
            }
            other => panic!("expected tree, got {other}"),
        }
    }

    #[test]
    fn test_classify_leaves_value_intact() {
        // Classification borrows; the source value stays usable for the
        // external-delegation payload.
        let value = json!({
            "type": "paragraph",
            "content": [{"type": "text", "text": "kept"}]
        });
        let input = Input::classify(&value);
        assert!(matches!(input, Input::Tree(_)));
        assert_eq!(value["content"][0]["text"], "kept");
    }

    #[test]
    fn test_classify_object_without_type_is_tree() {
        // Objects missing "type" still decode; the renderer treats them as
        // unknown nodes and passes their content through.
        let input = Input::classify(&json!({"content": []}));
        assert!(matches!(input, Input::Tree(_)));
    }

    #[test]
    fn test_classify_array_degrades_to_raw() {
        let input = Input::classify(&json!([1, 2, 3]));
        assert_eq!(input, Input::Raw("[1,2,3]".to_string()));
    }

    #[test]
    fn test_classify_number_degrades_to_raw() {
        assert_eq!(Input::classify(&json!(7)), Input::Raw("7".to_string()));
    }

    #[test]
    fn test_is_empty() {
        assert!(Input::Empty.is_empty());
        assert!(!Input::Raw("x".to_string()).is_empty());
    }
}

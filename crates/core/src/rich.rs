//! The editor's serialized content model: a tree of typed nodes with optional
//! attributes, inline text and formatting marks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

fn lookup<'a>(attrs: &'a Option<Map<String, Value>>, name: &str) -> Option<&'a Value> {
    attrs.as_ref()?.get(name).filter(|v| !v.is_null())
}

/// Renders a scalar attribute as a string. Objects and arrays yield `None`.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl RichNode {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        lookup(&self.attrs, name)
    }

    /// A scalar attribute as a string; empty strings count as absent.
    pub fn attr_str(&self, name: &str) -> Option<String> {
        self.attr(name).and_then(scalar).filter(|s| !s.is_empty())
    }

    pub fn attr_u64(&self, name: &str) -> Option<u64> {
        match self.attr(name)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl Mark {
    pub fn attr_str(&self, name: &str) -> Option<String> {
        lookup(&self.attrs, name).and_then(scalar).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_editor_json() {
        let node = RichNode::from_value(&json!({
            "type": "paragraph",
            "attrs": { "textAlign": "center" },
            "content": [
                { "type": "text", "text": "Hi", "marks": [{ "type": "bold" }] }
            ]
        }))
        .unwrap();
        assert_eq!(node.kind, "paragraph");
        assert_eq!(node.attr_str("textAlign").as_deref(), Some("center"));
        assert_eq!(node.content[0].text.as_deref(), Some("Hi"));
        assert_eq!(node.content[0].marks[0].kind, "bold");
    }

    #[test]
    fn test_null_attrs_and_missing_fields() {
        let node = RichNode::from_value(&json!({ "type": "paragraph", "attrs": null })).unwrap();
        assert!(node.attrs.is_none());
        assert!(node.content.is_empty());
        assert_eq!(node.attr_str("textAlign"), None);
    }

    #[test]
    fn test_attr_coercions() {
        let node = RichNode::from_value(&json!({
            "type": "orderedList",
            "attrs": { "start": 3, "level": "2", "empty": "", "nothing": null }
        }))
        .unwrap();
        assert_eq!(node.attr_u64("start"), Some(3));
        assert_eq!(node.attr_u64("level"), Some(2));
        assert_eq!(node.attr_str("start").as_deref(), Some("3"));
        assert_eq!(node.attr_str("empty"), None);
        assert_eq!(node.attr("nothing"), None);
    }
}

use crate::error::IdfError;
use crate::node::ContentNode;
use folio_style::parsers::kebab_case;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An owned rendered-content node.
///
/// In JSON a text node is a bare string and an element is an object:
/// `{"tag": "p", "attrs": {"class": "lead"}, "style": {"textAlign": "center"}, "children": ["Hi"]}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DomNode {
    Text(String),
    Element(Element),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    #[serde(default, alias = "attributes", skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Computed style, keyed by kebab-case property name.
    #[serde(
        default,
        deserialize_with = "deserialize_style",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub style: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomNode>,
}

fn deserialize_style<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: BTreeMap<String, String> = BTreeMap::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (kebab_case(&k), v)).collect())
}

impl DomNode {
    pub fn element(tag: impl Into<String>) -> Self {
        DomNode::Element(Element {
            tag: tag.into().to_ascii_lowercase(),
            ..Element::default()
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        DomNode::Text(text.into())
    }

    pub fn from_json(json: &str) -> Result<Self, IdfError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_xhtml(xhtml: &str) -> Result<Self, IdfError> {
        crate::xhtml::parse(xhtml)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let DomNode::Element(el) = &mut self {
            el.attrs.insert(name.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        if let DomNode::Element(el) = &mut self {
            el.style.insert(kebab_case(property), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DomNode>) -> Self {
        if let DomNode::Element(el) = &mut self {
            el.children.extend(children);
        }
        self
    }

    /// Appends a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(DomNode::Text(text.into()))
    }

    pub fn push_child(&mut self, child: DomNode) {
        if let DomNode::Element(el) = self {
            el.children.push(child);
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            DomNode::Element(el) => Some(el),
            DomNode::Text(_) => None,
        }
    }
}

impl ContentNode for DomNode {
    type Children<'a> = std::slice::Iter<'a, DomNode>;

    fn tag(&self) -> Option<&str> {
        self.as_element().map(|el| el.tag.as_str())
    }

    fn text(&self) -> Option<&str> {
        match self {
            DomNode::Text(text) => Some(text),
            DomNode::Element(_) => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_element()?.attrs.get(name).map(String::as_str)
    }

    fn children(&self) -> Self::Children<'_> {
        match self {
            DomNode::Element(el) => el.children.iter(),
            DomNode::Text(_) => {
                let empty: &[DomNode] = &[];
                empty.iter()
            }
        }
    }

    fn computed_style(&self, property: &str) -> Option<&str> {
        let el = self.as_element()?;
        el.style.get(&kebab_case(property)).map(String::as_str)
    }
}

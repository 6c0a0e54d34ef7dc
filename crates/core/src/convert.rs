//! Conversion of serialized rich content into rendered-output [`DomNode`] trees.
//!
//! The produced tree mirrors what the editor renders on screen: block nodes
//! become their HTML elements, marks become inline wrappers, and custom nodes
//! (mentions, page breaks, financial reports) carry the same `data-type`
//! markers the editor emits.

use crate::error::ParseError;
use crate::financial::financial_report_node;
use crate::rich::{Mark, RichNode};
use folio_idf::DomNode;
use std::collections::BTreeMap;

/// Converts rich content nodes, resolving mentions against a document's tag values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentConverter<'a> {
    tag_values: Option<&'a BTreeMap<String, String>>,
}

impl<'a> ContentConverter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_values(tag_values: &'a BTreeMap<String, String>) -> Self {
        Self {
            tag_values: Some(tag_values),
        }
    }

    /// Converts the children of a `doc` node. Anything else is rejected.
    pub fn convert_doc(&self, doc: &RichNode, section: &str) -> Result<Vec<DomNode>, ParseError> {
        if !doc.is("doc") {
            return Err(ParseError::UnexpectedRoot {
                section: section.to_string(),
                found: doc.kind.clone(),
            });
        }
        self.convert_children(doc)
    }

    pub fn convert_children(&self, node: &RichNode) -> Result<Vec<DomNode>, ParseError> {
        node.content.iter().map(|child| self.convert(child)).collect()
    }

    pub fn convert(&self, node: &RichNode) -> Result<DomNode, ParseError> {
        let converted = match node.kind.as_str() {
            "doc" => DomNode::element("div").with_children(self.convert_children(node)?),
            "text" => with_marks(DomNode::text(node.text.clone().unwrap_or_default()), &node.marks),
            "paragraph" => {
                aligned(DomNode::element("p"), node).with_children(self.convert_children(node)?)
            }
            "heading" => {
                let level = node.attr_u64("level").unwrap_or(1).clamp(1, 6);
                aligned(DomNode::element(format!("h{level}")), node)
                    .with_children(self.convert_children(node)?)
            }
            "hardBreak" => DomNode::element("br"),
            "bulletList" => DomNode::element("ul").with_children(self.convert_children(node)?),
            "orderedList" => {
                let mut list = DomNode::element("ol");
                if let Some(start) = node.attr_u64("start") {
                    list = list.with_attr("start", start.to_string());
                }
                list.with_children(self.convert_children(node)?)
            }
            "listItem" => DomNode::element("li").with_children(self.convert_children(node)?),
            "blockquote" => {
                DomNode::element("blockquote").with_children(self.convert_children(node)?)
            }
            "codeBlock" => DomNode::element("p")
                .with_attr("class", "code-block")
                .with_children(self.convert_children(node)?),
            "table" => DomNode::element("table")
                .with_child(DomNode::element("tbody").with_children(self.convert_children(node)?)),
            "tableRow" => DomNode::element("tr").with_children(self.convert_children(node)?),
            "tableHeader" => DomNode::element("th").with_children(self.convert_children(node)?),
            "tableCell" => DomNode::element("td").with_children(self.convert_children(node)?),
            "image" => image_node(node),
            "horizontalRule" => DomNode::element("hr"),
            "pageBreak" => DomNode::element("div")
                .with_attr("class", "page-break")
                .with_attr("data-type", "page-break"),
            "mention" => self.mention_node(node),
            "financialReport" => financial_report_node(node)?,
            other => {
                log::debug!("Unknown content node type '{}', rendering its children", other);
                DomNode::element("div")
                    .with_attr("data-type", other)
                    .with_children(self.convert_children(node)?)
            }
        };
        Ok(converted)
    }

    /// The displayed text of a tag mention: its tag value, else its label, else `{{id}}`.
    pub fn mention_text(&self, node: &RichNode) -> String {
        let id = node.attr_str("id").unwrap_or_default();
        self.tag_values
            .and_then(|values| values.get(&id))
            .filter(|v| !v.is_empty())
            .cloned()
            .or_else(|| node.attr_str("label"))
            .unwrap_or_else(|| format!("{{{{{id}}}}}"))
    }

    fn mention_node(&self, node: &RichNode) -> DomNode {
        let mut span = DomNode::element("span").with_attr("data-type", "mention");
        if let Some(id) = node.attr_str("id") {
            span = span.with_attr("data-id", id);
        }
        span.with_text(self.mention_text(node))
    }
}

fn aligned(element: DomNode, node: &RichNode) -> DomNode {
    match node.attr_str("textAlign") {
        Some(align) => element.with_style("text-align", align),
        None => element,
    }
}

fn mark_element(mark: &Mark) -> DomNode {
    match mark.kind.as_str() {
        "bold" => DomNode::element("strong"),
        "italic" => DomNode::element("em"),
        "underline" => DomNode::element("u"),
        "strike" => DomNode::element("s"),
        "code" => DomNode::element("code"),
        "highlight" => DomNode::element("mark"),
        "subscript" => DomNode::element("sub"),
        "superscript" => DomNode::element("sup"),
        "link" => {
            let link = DomNode::element("a");
            match mark.attr_str("href") {
                Some(href) => link.with_attr("href", href),
                None => link,
            }
        }
        _ => DomNode::element("span"),
    }
}

/// Wraps a text node in one inline element per mark; the first mark is outermost.
fn with_marks(text: DomNode, marks: &[Mark]) -> DomNode {
    marks
        .iter()
        .rev()
        .fold(text, |inner, mark| mark_element(mark).with_child(inner))
}

/// The editor renders images inside an alignment wrapper.
fn image_node(node: &RichNode) -> DomNode {
    let mut img = DomNode::element("img");
    for name in ["src", "alt", "title", "width", "height"] {
        if let Some(value) = node.attr_str(name) {
            img = img.with_attr(name, value);
        }
    }
    let align = node
        .attr_str("align")
        .or_else(|| node.attr_str("dataAlign"))
        .or_else(|| node.attr_str("textAlign"))
        .unwrap_or_else(|| "left".to_string());
    DomNode::element("div")
        .with_attr("class", "image-wrapper")
        .with_attr("data-align", align)
        .with_child(img)
}

//! Parsing of well-formed XHTML fragments into [`DomNode`] trees.

use crate::dom::DomNode;
use crate::error::IdfError;

const FRAGMENT_ROOT: &str = "folio-fragment";

/// Parses an XHTML document or fragment.
///
/// A full document (starting with an XML declaration or a single `html`
/// element) yields its root element. Anything else is treated as a fragment and
/// wrapped in a `div`, so multiple top-level blocks are accepted.
pub(crate) fn parse(input: &str) -> Result<DomNode, IdfError> {
    let trimmed = input.trim_start();
    if trimmed.starts_with("<?xml") || trimmed.starts_with("<html") {
        let doc = roxmltree::Document::parse(trimmed)?;
        return Ok(convert(doc.root_element()));
    }

    let wrapped = format!("<{FRAGMENT_ROOT}>{input}</{FRAGMENT_ROOT}>");
    let doc = roxmltree::Document::parse(&wrapped)?;
    let mut root = DomNode::element("div");
    for child in doc.root_element().children() {
        if let Some(node) = convert_any(child) {
            root.push_child(node);
        }
    }
    Ok(root)
}

fn convert_any(node: roxmltree::Node<'_, '_>) -> Option<DomNode> {
    if node.is_element() {
        Some(convert(node))
    } else if node.is_text() {
        node.text().map(DomNode::text)
    } else {
        None
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> DomNode {
    let mut element = DomNode::element(node.tag_name().name());
    for attr in node.attributes() {
        element = element.with_attr(attr.name(), attr.value());
    }
    for child in node.children() {
        if let Some(converted) = convert_any(child) {
            element.push_child(converted);
        }
    }
    element
}

#[cfg(test)]
mod tests {
    use crate::{ContentNode, DomNode};

    #[test]
    fn test_fragment_with_multiple_blocks() {
        let root = DomNode::from_xhtml("<h1>Title</h1><p>One<br/>Two</p>").unwrap();
        assert!(root.is_element("div"));
        let tags: Vec<_> = root.children().filter_map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["h1", "p"]);
        let p = root.children().nth(1).unwrap();
        assert_eq!(p.children().count(), 3);
        assert_eq!(p.text_content(), "OneTwo");
    }

    #[test]
    fn test_namespaced_document() {
        let xhtml = r#"<?xml version="1.0"?>
            <html xmlns="http://www.w3.org/1999/xhtml"><body><p class="page-break"/></body></html>"#;
        let root = DomNode::from_xhtml(xhtml).unwrap();
        assert!(root.is_element("html"));
        let body = root.children().find(|c| c.is_element("body")).unwrap();
        let p = body.children().find(|c| c.is_element("p")).unwrap();
        assert!(p.has_class("page-break"));
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(DomNode::from_xhtml("<p>unclosed").is_err());
    }
}

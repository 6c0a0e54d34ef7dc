//! A whole document as a single content tree.

use crate::convert::ContentConverter;
use crate::error::ParseError;
use crate::rich::RichNode;
use folio_idf::DomNode;
use folio_types::{Document, Section};
use serde_json::Value;

/// Converts one section's content into block nodes. Missing content yields no blocks.
pub fn render_section(
    section: &Section,
    converter: &ContentConverter<'_>,
) -> Result<Vec<DomNode>, ParseError> {
    if section.content.is_null() {
        return Ok(Vec::new());
    }
    let doc = match &section.content {
        Value::String(raw) => serde_json::from_str::<RichNode>(raw)?,
        other => RichNode::from_value(other)?,
    };
    converter.convert_doc(&doc, &section.id)
}

/// Builds the root container for a document: for every group of the normalized
/// outline, the parent title as `h1` and its content, then each child's title
/// as `h2` followed by its content.
pub fn render_document(doc: &Document) -> Result<DomNode, ParseError> {
    let converter = ContentConverter::with_tag_values(&doc.tag_values);
    let mut root = DomNode::element("div").with_attr("class", "document");

    for group in folio_outline::build_groups(&doc.sections) {
        root.push_child(DomNode::element("h1").with_text(group.parent.title.as_str()));
        for block in render_section(&group.parent, &converter)? {
            root.push_child(block);
        }
        for child in &group.children {
            root.push_child(DomNode::element("h2").with_text(child.title.as_str()));
            for block in render_section(child, &converter)? {
                root.push_child(block);
            }
        }
    }

    log::debug!(
        "Converted document '{}' ({} sections)",
        doc.title,
        doc.sections.len()
    );
    Ok(root)
}

#![allow(dead_code)]

use folio::{DomNode, Document, Section};
use serde_json::{Value, json};

pub fn text(value: &str) -> Value {
    json!({ "type": "text", "text": value })
}

pub fn paragraph(value: &str) -> Value {
    json!({ "type": "paragraph", "content": [text(value)] })
}

pub fn heading(level: u8, value: &str) -> Value {
    json!({ "type": "heading", "attrs": { "level": level }, "content": [text(value)] })
}

pub fn page_break() -> Value {
    json!({ "type": "pageBreak" })
}

pub fn mention(id: &str, label: &str) -> Value {
    json!({ "type": "mention", "attrs": { "id": id, "label": label } })
}

pub fn doc(content: Vec<Value>) -> Value {
    json!({ "type": "doc", "content": content })
}

/// A revenue block in the current shape with two numeric rows.
pub fn revenue_report(show_totals: bool) -> Value {
    json!({
        "type": "financialReport",
        "attrs": {
            "leftColumns": [
                { "id": "accountNumber", "label": "Account", "align": "left" },
                { "id": "label", "label": "Description", "align": "left" }
            ],
            "rightColumns": [
                { "id": "y2024", "label": "2024", "align": "right" }
            ],
            "rows": [
                { "id": "r1", "values": { "accountNumber": "3000", "label": "Sales", "y2024": "1,200" } },
                { "id": "r2", "values": { "accountNumber": "3100", "label": "Services", "y2024": "800" } }
            ],
            "showTotals": show_totals
        }
    })
}

pub fn section(title: &str, order: i64, content: Value) -> Section {
    Section {
        order,
        content,
        ..Section::new(title)
    }
}

pub fn child_section(parent: &Section, title: &str, order: i64, content: Value) -> Section {
    Section {
        order,
        content,
        ..Section::new_child(parent.id.clone(), title)
    }
}

/// Two chapters, the first with one subsection.
pub fn annual_report() -> Document {
    let intro = section(
        "Introduction",
        0,
        doc(vec![
            paragraph("Welcome to the annual report."),
            json!({
                "type": "paragraph",
                "content": [text("Prepared for "), mention("company", "Company")]
            }),
        ]),
    );
    let outlook_body = doc(vec![paragraph("Next year looks steady.")]);
    let outlook = child_section(&intro, "Outlook", 1, outlook_body);
    let figures = section("Figures", 2, doc(vec![revenue_report(true)]));

    let mut document = Document::new("Annual Report 2024");
    document.sections = vec![intro, outlook, figures];
    document
        .tag_values
        .insert("company".to_string(), "Acme Holding".to_string());
    document
}

pub fn paragraphs_split_by_break() -> DomNode {
    DomNode::element("div").with_children([
        DomNode::element("p").with_text("Before the break"),
        DomNode::element("div")
            .with_attr("class", "page-break")
            .with_attr("data-type", "page-break"),
        DomNode::element("p").with_text("After the break"),
    ])
}

/// A 1x1 red PNG as a data URL.
pub fn tiny_png_data_url() -> String {
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==".to_string()
}

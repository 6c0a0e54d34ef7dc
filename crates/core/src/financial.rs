//! Financial report blocks rendered as the plain table the editor shows.

use crate::error::ParseError;
use crate::rich::RichNode;
use folio_idf::DomNode;
use folio_types::{ColumnAlign, FinancialColumn, FinancialReportBlock};
use serde_json::Value;

pub const TOTAL_LABEL: &str = "Total";

fn align_name(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => "left",
        ColumnAlign::Center => "center",
        ColumnAlign::Right => "right",
    }
}

fn cell(tag: &str, column: &FinancialColumn, text: &str) -> DomNode {
    DomNode::element(tag)
        .with_style("text-align", align_name(column.align))
        .with_text(text)
}

/// Decodes the block stored in a `financialReport` node's attributes (either
/// directly or under `data`), migrating legacy shapes.
pub fn financial_report_node(node: &RichNode) -> Result<DomNode, ParseError> {
    let data = match node.attr("data") {
        Some(data @ Value::Object(_)) => data.clone(),
        _ => Value::Object(node.attrs.clone().unwrap_or_default()),
    };
    let block = FinancialReportBlock::from_value(&data).map_err(ParseError::FinancialReport)?;
    Ok(block_to_node(&block))
}

/// A `div[data-type=financial-report]` wrapping a header row of column labels,
/// one row per data row and, when enabled, a totals row.
pub fn block_to_node(block: &FinancialReportBlock) -> DomNode {
    let header = DomNode::element("tr")
        .with_children(block.columns().map(|col| cell("th", col, &col.label)));

    let mut body = DomNode::element("tbody").with_children(block.rows.iter().map(|row| {
        DomNode::element("tr")
            .with_children(block.columns().map(|col| cell("td", col, row.value(&col.id))))
    }));

    if block.show_totals {
        let totals = block.totals();
        let left = block.left_columns.iter().enumerate().map(|(i, col)| {
            cell("td", col, if i == 0 { TOTAL_LABEL } else { "" })
        });
        let right = block.right_columns.iter().map(|col| {
            cell("td", col, totals.get(&col.id).map(String::as_str).unwrap_or_default())
        });
        body.push_child(
            DomNode::element("tr")
                .with_attr("class", "total-row")
                .with_children(left.chain(right)),
        );
    }

    DomNode::element("div")
        .with_attr("data-type", "financial-report")
        .with_child(
            DomNode::element("table")
                .with_child(DomNode::element("thead").with_child(header))
                .with_child(body),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::ContentNode;
    use serde_json::json;

    fn rows_of(node: &DomNode) -> Vec<Vec<String>> {
        let table = node.children().next().unwrap();
        table
            .children()
            .flat_map(|group| group.children())
            .map(|tr| tr.children().map(|c| c.text_content()).collect())
            .collect()
    }

    fn report(attrs: Value) -> DomNode {
        let node = RichNode::from_value(&json!({ "type": "financialReport", "attrs": attrs })).unwrap();
        financial_report_node(&node).unwrap()
    }

    #[test]
    fn test_canonical_block_with_totals() {
        let node = report(json!({
            "leftColumns": [{ "id": "desc", "label": "Description" }],
            "rightColumns": [{ "id": "y24", "label": "2024", "align": "right" }],
            "rows": [
                { "id": "a", "values": { "desc": "Revenue", "y24": "1,234.50" } },
                { "id": "b", "values": { "desc": "Costs", "y24": "(500)" } },
                { "id": "c", "values": { "desc": "Note", "y24": "n/a" } }
            ],
            "showTotals": true
        }));
        assert_eq!(node.attribute("data-type"), Some("financial-report"));
        assert_eq!(
            rows_of(&node),
            vec![
                vec!["Description", "2024"],
                vec!["Revenue", "1,234.50"],
                vec!["Costs", "(500)"],
                vec!["Note", "n/a"],
                vec!["Total", "734.50"],
            ]
        );
    }

    #[test]
    fn test_block_under_data_attribute_without_totals() {
        let node = report(json!({
            "data": {
                "leftColumns": [],
                "rightColumns": [{ "id": "v", "label": "Value" }],
                "rows": [{ "id": "a", "values": { "v": "10" } }]
            }
        }));
        assert_eq!(rows_of(&node), vec![vec!["Value"], vec!["10"]]);
    }

    #[test]
    fn test_legacy_block_is_migrated() {
        let node = report(json!({
            "accountNumberColumn": { "label": "Acct" },
            "columns": [{ "id": "amt", "label": "Amount" }],
            "rows": [
                { "id": "r1", "accountNumber": "1000", "label": "Cash", "values": { "amt": "2,000" } },
                { "id": "r2", "accountNumber": 1100, "label": "Receivables", "values": { "amt": "1,000" } }
            ],
            "showTotals": true
        }));
        assert_eq!(
            rows_of(&node),
            vec![
                vec!["Acct", "Description", "Amount"],
                vec!["1000", "Cash", "2,000"],
                vec!["1100", "Receivables", "1,000"],
                vec!["Total", "", "3,000"],
            ]
        );
    }

    #[test]
    fn test_unrecognized_shape_is_an_error() {
        let node = RichNode::from_value(&json!({
            "type": "financialReport",
            "attrs": { "rows": "not a list" }
        }))
        .unwrap();
        assert!(matches!(financial_report_node(&node), Err(ParseError::FinancialReport(_))));
    }
}

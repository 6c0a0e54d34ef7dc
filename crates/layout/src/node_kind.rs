use folio_idf::ContentNode;

/// How the block-level walker treats a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    List { ordered: bool },
    Table,
    Image,
    PageBreak,
    HorizontalRule,
    /// Rendered through its children, without spacing of its own.
    Container,
    /// Text and inline elements; only meaningful inside a block.
    Inline,
}

const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "br", "code", "del", "em", "i", "kbd", "label", "mark", "q", "s", "small",
    "span", "strike", "strong", "sub", "sup", "u",
];

/// True for elements that mark a manual page break.
pub fn is_page_break<N: ContentNode>(node: &N) -> bool {
    node.tag().is_some()
        && (node.has_class("page-break") || node.attribute("data-type") == Some("page-break"))
}

impl BlockKind {
    pub fn of<N: ContentNode>(node: &N) -> Self {
        let Some(tag) = node.tag() else {
            return BlockKind::Inline;
        };
        if is_page_break(node) {
            return BlockKind::PageBreak;
        }
        match tag.to_ascii_lowercase().as_str() {
            "h1" => BlockKind::Heading(1),
            "h2" => BlockKind::Heading(2),
            "h3" => BlockKind::Heading(3),
            "h4" => BlockKind::Heading(4),
            "h5" => BlockKind::Heading(5),
            "h6" => BlockKind::Heading(6),
            "p" => BlockKind::Paragraph,
            "ul" => BlockKind::List { ordered: false },
            "ol" => BlockKind::List { ordered: true },
            "table" => BlockKind::Table,
            "img" => BlockKind::Image,
            "hr" => BlockKind::HorizontalRule,
            t if INLINE_TAGS.contains(&t) => BlockKind::Inline,
            _ => BlockKind::Container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_idf::DomNode;

    #[test]
    fn test_classification() {
        assert_eq!(BlockKind::of(&DomNode::element("h2")), BlockKind::Heading(2));
        assert_eq!(BlockKind::of(&DomNode::element("ol")), BlockKind::List { ordered: true });
        assert_eq!(BlockKind::of(&DomNode::element("strong")), BlockKind::Inline);
        assert_eq!(BlockKind::of(&DomNode::text("x")), BlockKind::Inline);
        assert_eq!(BlockKind::of(&DomNode::element("blockquote")), BlockKind::Container);
    }

    #[test]
    fn test_page_break_markers() {
        let by_class = DomNode::element("div").with_attr("class", "node page-break");
        let by_type = DomNode::element("div").with_attr("data-type", "page-break");
        assert_eq!(BlockKind::of(&by_class), BlockKind::PageBreak);
        assert_eq!(BlockKind::of(&by_type), BlockKind::PageBreak);
        assert!(!is_page_break(&DomNode::text("page-break")));
    }
}

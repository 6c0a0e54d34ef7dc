use folio_style::InlineStyle;

/// The capability set the renderer needs from a rendered content tree.
///
/// Text nodes return `None` from [`tag`](ContentNode::tag) and `Some` from
/// [`text`](ContentNode::text); elements the other way around.
pub trait ContentNode {
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    /// Lowercase element name, or `None` for a text node.
    fn tag(&self) -> Option<&str>;

    /// The character data of a text node.
    fn text(&self) -> Option<&str>;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn children(&self) -> Self::Children<'_>;

    /// A computed style value supplied by the producer of the tree, if any.
    fn computed_style(&self, _property: &str) -> Option<&str> {
        None
    }

    /// Resolves a style property: the computed style first, then the inline
    /// `style` attribute. Accepts both `textAlign` and `text-align`.
    fn style(&self, property: &str) -> Option<String> {
        if let Some(value) = self.computed_style(property) {
            return Some(value.to_string());
        }
        let inline = InlineStyle::parse(self.attribute("style")?);
        inline.get(property).map(str::to_string)
    }

    fn is_element(&self, tag: &str) -> bool {
        self.tag().is_some_and(|t| t.eq_ignore_ascii_case(tag))
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Natural pixel size of a replaced element (an `img`), when the producer knows it.
    fn intrinsic_size(&self) -> Option<(f32, f32)> {
        let width: f32 = self.attribute("data-natural-width")?.trim().parse().ok()?;
        let height: f32 = self.attribute("data-natural-height")?.trim().parse().ok()?;
        (width.is_finite() && height.is_finite()).then_some((width, height))
    }

    /// Concatenated text of this node and all its descendants.
    fn text_content(&self) -> String
    where
        Self: Sized,
    {
        let mut out = String::new();
        append_text(self, &mut out);
        out
    }
}

fn append_text<N: ContentNode>(node: &N, out: &mut String) {
    match node.text() {
        Some(text) => out.push_str(text),
        None => {
            for child in node.children() {
                append_text(child, out);
            }
        }
    }
}

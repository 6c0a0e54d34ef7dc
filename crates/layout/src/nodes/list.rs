use crate::node_kind::BlockKind;
use crate::text::{collapse_whitespace, wrap_text};
use crate::{LayoutError, Renderer};
use folio_idf::ContentNode;
use folio_render_core::PdfSurface;

fn is_list<N: ContentNode>(node: &N) -> bool {
    node.is_element("ul") || node.is_element("ol")
}

/// Text of a list item, excluding nested lists. Block children are joined by a space.
fn item_text<N: ContentNode>(node: &N, out: &mut String) {
    for child in node.children() {
        if let Some(text) = child.text() {
            out.push_str(text);
        } else if is_list(child) {
            continue;
        } else if child.is_element("br") {
            out.push(' ');
        } else {
            let block = BlockKind::of(child) != BlockKind::Inline;
            if block {
                out.push(' ');
            }
            item_text(child, out);
            if block {
                out.push(' ');
            }
        }
    }
}

/// Outermost lists below `node`, in document order.
fn nested_lists<'n, N: ContentNode>(node: &'n N, out: &mut Vec<&'n N>) {
    for child in node.children() {
        if is_list(child) {
            out.push(child);
        } else if child.tag().is_some() {
            nested_lists(child, out);
        }
    }
}

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Renders a list and its nested lists. Each level indents by `list_indent`;
    /// ordered items are numbered from the `start` attribute (default 1).
    pub(crate) fn render_list<N: ContentNode>(
        &mut self,
        list: &N,
        ordered: bool,
        level: usize,
        depth: usize,
    ) -> Result<(), LayoutError> {
        if depth > self.config.max_depth {
            return Err(LayoutError::NestingTooDeep(self.config.max_depth));
        }

        let start = if ordered {
            list.attribute("start")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(1)
        } else {
            1
        };
        let font = self.body_font();
        let indent = level as f32 * self.config.list_indent;
        let x = self.ctx.padding() + indent;
        let width = self.ctx.content_width();

        for (index, item) in list.children().filter(|c| c.is_element("li")).enumerate() {
            let mut raw = String::new();
            item_text(item, &mut raw);
            let text = collapse_whitespace(&raw);

            if !text.is_empty() {
                let prefix = if ordered {
                    format!("{}. ", start + index)
                } else {
                    "\u{2022} ".to_string()
                };
                let lines = wrap_text(&format!("{prefix}{text}"), width, indent, &font);
                self.draw_lines(&lines, x, font);
            }

            let mut nested = Vec::new();
            nested_lists(item, &mut nested);
            for sublist in nested {
                self.render_list(sublist, sublist.is_element("ol"), level + 1, depth + 1)?;
            }
        }

        if level == 0 {
            self.ctx.y += self.config.list_spacing;
        }
        Ok(())
    }
}

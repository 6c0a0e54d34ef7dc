use crate::Renderer;
use crate::text::wrap_text;
use folio_idf::ContentNode;
use folio_render_core::PdfSurface;

/// Splits a paragraph's text on `<br>` elements, returning the segments and
/// the number of breaks seen.
fn split_on_breaks<N: ContentNode>(node: &N) -> (Vec<String>, usize) {
    fn walk<N: ContentNode>(node: &N, segments: &mut Vec<String>, breaks: &mut usize) {
        for child in node.children() {
            if let Some(text) = child.text() {
                if let Some(current) = segments.last_mut() {
                    current.push_str(text);
                }
            } else if child.is_element("br") {
                *breaks += 1;
                segments.push(String::new());
            } else {
                walk(child, segments, breaks);
            }
        }
    }

    let mut segments = vec![String::new()];
    let mut breaks = 0;
    walk(node, &mut segments, &mut breaks);
    (segments, breaks)
}

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Body text wrapped to the content width.
    ///
    /// A paragraph with no visible text is a spacer: it advances one blank line,
    /// or `breaks - 1` lines when it holds more than one `<br>`. Spacers add no
    /// paragraph spacing.
    pub(crate) fn render_paragraph<N: ContentNode>(&mut self, node: &N) {
        let (mut segments, breaks) = split_on_breaks(node);

        if segments.iter().all(|s| s.trim().is_empty()) {
            let blank_lines = breaks.saturating_sub(1).max(1);
            for _ in 0..blank_lines {
                self.blank_line();
            }
            return;
        }

        while segments.last().is_some_and(|s| s.trim().is_empty()) {
            segments.pop();
        }

        let font = self.body_font();
        let width = self.ctx.content_width();
        let x = self.ctx.padding();
        for segment in &segments {
            let lines = wrap_text(segment, width, 0.0, &font);
            if lines.is_empty() {
                self.blank_line();
            } else {
                self.draw_lines(&lines, x, font);
            }
        }
        self.ctx.y += self.config.paragraph_spacing;
    }
}

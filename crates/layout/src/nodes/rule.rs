use crate::Renderer;
use folio_render_core::PdfSurface;
use folio_types::Color;

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    pub(crate) fn render_rule(&mut self) {
        self.ctx.y += self.config.rule_spacing;
        let y = self.ensure_space(self.config.rule_width);
        let x = self.ctx.padding();
        self.surface.set_draw_color(Color::BLACK);
        self.surface.set_line_width(self.config.rule_width);
        self.surface.line(x, y, x + self.ctx.content_width(), y);
        self.ctx.y = y + self.config.rule_spacing;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{approx, doc, render};
    use folio_idf::DomNode;
    use folio_render_core::DrawCall;

    #[test]
    fn test_rule_spans_content_width() {
        let surface = render(&doc([DomNode::element("hr")]));
        let line = surface
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Line { x1, y1, x2, y2 } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line, (12.0, 16.0, 248.0, 16.0));
        assert!(surface.calls.contains(&DrawCall::SetLineWidth(0.3)));
    }

    #[test]
    fn test_rule_advances_cursor() {
        let root = doc([
            DomNode::element("hr"),
            DomNode::element("p").with_text("after"),
        ]);
        let surface = render(&root);
        let (_, _, y, _) = surface.texts()[0];
        assert!(approx(y, 12.0 + 8.0 + crate::text::baseline_offset(11.0, 0.8)));
    }
}

use crate::Renderer;
use folio_render_core::PdfSurface;

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Always starts a new page, even when the current one is still empty.
    pub(crate) fn render_page_break(&mut self) {
        self.ctx.new_page(&mut *self.surface);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{doc, p, render};
    use folio_idf::DomNode;
    use folio_render_core::PdfSurface;

    #[test]
    fn test_single_break_adds_one_page() {
        let surface = render(&doc([
            p("before"),
            DomNode::element("div").with_attr("class", "page-break"),
            p("after"),
        ]));
        assert_eq!(surface.add_page_calls(), 1);
        assert_eq!(surface.page_count(), 2);
        let texts = surface.texts();
        assert!(texts[1].2 < texts[0].2 + 1.0);
    }

    #[test]
    fn test_data_type_marker_and_leading_break() {
        let surface = render(&doc([
            DomNode::element("div").with_attr("data-type", "page-break"),
            DomNode::element("hr").with_attr("class", "page-break"),
        ]));
        assert_eq!(surface.add_page_calls(), 2);
        assert_eq!(surface.line_calls(), 0);
    }
}

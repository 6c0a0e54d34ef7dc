use crate::Renderer;
use crate::text::wrap_text;
use folio_idf::ContentNode;
use folio_render_core::{Font, PdfSurface};

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Bold, wrapped to the content width, with level-dependent spacing around it.
    /// Headings without visible text take no space.
    pub(crate) fn render_heading<N: ContentNode>(&mut self, node: &N, level: u8) {
        let size = self.config.heading_size(level);
        let font = Font::bold(self.ctx.font_family, size);
        let lines = wrap_text(&node.text_content(), self.ctx.content_width(), 0.0, &font);
        if lines.is_empty() {
            return;
        }

        let (before, after) = self.config.heading_spacing(level);
        self.ctx.y += before;
        self.draw_lines(&lines, self.ctx.padding(), font);
        self.ctx.y += after;
    }
}

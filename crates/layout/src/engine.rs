use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::context::RenderContext;
use crate::node_kind::BlockKind;
use crate::text::{baseline_offset, line_height};
use folio_idf::ContentNode;
use folio_render_core::{Font, PdfSurface};
use folio_style::ExportOptions;
use folio_traits::ResourceProvider;

/// Outcome of laying out one content tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSummary {
    pub pages: usize,
    /// Cursor position on the last page.
    pub cursor_y: f32,
}

/// Walks a content tree depth-first and draws it onto a surface.
///
/// Owns the [`RenderContext`] for the duration of one export; block renderers
/// live in `nodes/` as further `impl` blocks on this type.
pub struct Renderer<'a, S: PdfSurface + ?Sized> {
    pub ctx: RenderContext,
    pub(crate) surface: &'a mut S,
    pub(crate) resources: &'a dyn ResourceProvider,
    pub(crate) config: LayoutConfig,
}

impl<'a, S: PdfSurface + ?Sized> Renderer<'a, S> {
    pub fn new(
        options: &ExportOptions,
        surface: &'a mut S,
        resources: &'a dyn ResourceProvider,
    ) -> Result<Self, LayoutError> {
        let geometry = options.page_width.geometry();
        if geometry.content_width() <= 0.0 {
            return Err(LayoutError::InvalidGeometry(geometry.content_width()));
        }
        Ok(Self {
            ctx: RenderContext::new(geometry, options.font_family),
            surface,
            resources,
            config: LayoutConfig::default(),
        })
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Renders every child of `node` as a block.
    pub fn render_children<N: ContentNode>(
        &mut self,
        node: &N,
        depth: usize,
    ) -> Result<(), LayoutError> {
        for child in node.children() {
            self.render_block(child, Some(node), depth + 1)?;
        }
        Ok(())
    }

    /// Dispatches one node by its block kind. `parent` is consulted for image alignment.
    pub fn render_block<N: ContentNode>(
        &mut self,
        node: &N,
        parent: Option<&N>,
        depth: usize,
    ) -> Result<(), LayoutError> {
        if depth > self.config.max_depth {
            return Err(LayoutError::NestingTooDeep(self.config.max_depth));
        }

        let kind = BlockKind::of(node);
        if kind != BlockKind::Inline {
            log::debug!("Rendering {:?} at y={:.2}mm", kind, self.ctx.y);
        }
        match kind {
            BlockKind::Heading(level) => self.render_heading(node, level),
            BlockKind::Paragraph => self.render_paragraph(node),
            BlockKind::List { ordered } => self.render_list(node, ordered, 0, depth)?,
            BlockKind::Table => self.render_table(node),
            BlockKind::Image => self.render_image(node, parent),
            BlockKind::PageBreak => self.render_page_break(),
            BlockKind::HorizontalRule => self.render_rule(),
            BlockKind::Container => self.render_children(node, depth)?,
            BlockKind::Inline => {}
        }
        Ok(())
    }

    pub fn finish(self) -> LayoutSummary {
        LayoutSummary {
            pages: self.surface.page_count(),
            cursor_y: self.ctx.y,
        }
    }

    // --- Shared helpers for block renderers ---

    pub(crate) fn ensure_space(&mut self, needed: f32) -> f32 {
        self.ctx.ensure_space(&mut *self.surface, needed)
    }

    pub(crate) fn line_height(&self, size_pt: f32) -> f32 {
        line_height(size_pt, self.config.line_height_factor)
    }

    pub(crate) fn baseline(&self, size_pt: f32) -> f32 {
        baseline_offset(size_pt, self.config.baseline_ratio)
    }

    pub(crate) fn body_font(&self) -> Font {
        Font::regular(self.ctx.font_family, self.config.body_font_size)
    }

    /// Advances the cursor by one empty line of body text.
    pub(crate) fn blank_line(&mut self) {
        let lh = self.line_height(self.config.body_font_size);
        self.ensure_space(lh);
        self.ctx.y += lh;
    }

    /// Draws pre-wrapped lines at `x`, one line height apart, breaking pages as needed.
    pub(crate) fn draw_lines(&mut self, lines: &[String], x: f32, font: Font) {
        let lh = self.line_height(font.size_pt);
        let baseline = self.baseline(font.size_pt);
        self.surface.set_font(font);
        for line in lines {
            let y = self.ensure_space(lh);
            self.surface.text(line, x, y + baseline);
            self.ctx.y = y + lh;
        }
    }
}

/// Lays out the children of `root` onto `surface` using the page geometry and
/// font family from `options`.
pub fn render_tree<N, S>(
    root: &N,
    options: &ExportOptions,
    surface: &mut S,
    resources: &dyn ResourceProvider,
) -> Result<LayoutSummary, LayoutError>
where
    N: ContentNode,
    S: PdfSurface + ?Sized,
{
    let mut renderer = Renderer::new(options, surface, resources)?;
    renderer.render_children(root, 0)?;
    Ok(renderer.finish())
}

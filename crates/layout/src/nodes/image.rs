use crate::Renderer;
use folio_idf::ContentNode;
use folio_render_core::metrics::text_width;
use folio_render_core::{Font, PdfSurface};
use folio_style::parsers::parse_dimension_value;
use folio_style::{PX_TO_MM, TextAlign};
use folio_types::{Color, Rect, Size};
use std::io::Cursor;

const PLACEHOLDER_LABEL: &str = "[Image]";

/// Pixel dimensions read from the image header, without decoding pixels.
fn probe_dimensions(data: &[u8]) -> Option<(f32, f32)> {
    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    let (width, height) = reader.into_dimensions().ok()?;
    Some((width as f32, height as f32))
}

/// A length from the attribute of that name, else from the inline style, in mm.
fn declared_mm<N: ContentNode>(node: &N, name: &str, reference_mm: f32) -> Option<f32> {
    let from_attr = node
        .attribute(name)
        .and_then(|v| parse_dimension_value(v).ok());
    let from_style = || {
        node.style(name)
            .and_then(|v| parse_dimension_value(&v).ok())
    };
    from_attr
        .or_else(from_style)
        .and_then(|d| d.resolve_mm(reference_mm))
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Alignment from the image's own `data-align`, then its parent's `text-align`,
/// `data-align` or an `align-*`/`text-*` class. Defaults to left.
fn resolve_alignment<N: ContentNode>(img: &N, parent: Option<&N>) -> TextAlign {
    if let Some(align) = img.attribute("data-align").and_then(TextAlign::parse) {
        return align;
    }
    let Some(parent) = parent else {
        return TextAlign::default();
    };
    parent
        .style("text-align")
        .and_then(|v| TextAlign::parse(&v))
        .or_else(|| parent.attribute("data-align").and_then(TextAlign::parse))
        .or_else(|| {
            [
                ("center", TextAlign::Center),
                ("right", TextAlign::Right),
                ("left", TextAlign::Left),
            ]
            .into_iter()
            .find(|(name, _)| {
                parent.has_class(&format!("align-{name}"))
                    || parent.has_class(&format!("text-{name}"))
            })
            .map(|(_, align)| align)
        })
        .unwrap_or_default()
}

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Draws an image scaled to fit the content box, or a gray placeholder when
    /// it cannot be loaded or embedded.
    pub(crate) fn render_image<N: ContentNode>(&mut self, img: &N, parent: Option<&N>) {
        let src = img.attribute("src").map(str::trim).filter(|s| !s.is_empty());
        let loaded = match src {
            Some(src) => self.resources.load(src).map_err(|e| e.to_string()),
            None => Err("missing src".to_string()),
        };

        let size = self.image_size(img, loaded.as_ref().ok().map(|d| d.as_slice()));
        let y = self.ensure_space(size.height);
        let x = resolve_alignment(img, parent).offset(
            self.ctx.padding(),
            self.ctx.content_width(),
            size.width,
        );
        let rect = Rect::new(x, y, size.width, size.height);

        let embedded = loaded.and_then(|data| {
            self.surface
                .add_image(&data, rect)
                .map_err(|e| e.to_string())
        });
        if let Err(reason) = embedded {
            log::warn!(
                "Image '{}' could not be embedded, drawing placeholder: {}",
                src.unwrap_or_default(),
                reason
            );
            self.draw_image_placeholder(rect);
        }
        self.ctx.y = y + size.height + self.config.image_spacing;
    }

    /// Declared size, completing a missing side from the intrinsic aspect ratio,
    /// then scaled down to the content width and the maximum image height.
    fn image_size<N: ContentNode>(&self, img: &N, data: Option<&[u8]>) -> Size {
        let content_width = self.ctx.content_width();
        let width = declared_mm(img, "width", content_width);
        let height = declared_mm(img, "height", self.ctx.geometry.max_image_height());
        let intrinsic = img
            .intrinsic_size()
            .or_else(|| data.and_then(probe_dimensions))
            .filter(|(w, h)| w.is_finite() && h.is_finite() && *w > 0.0 && *h > 0.0)
            .map(|(w, h)| (w * PX_TO_MM, h * PX_TO_MM));
        let (default_w, default_h) = self.config.default_image_px;
        let (default_w, default_h) = (default_w * PX_TO_MM, default_h * PX_TO_MM);

        let (w, h) = match (width, height, intrinsic) {
            (Some(w), Some(h), _) => (w, h),
            (Some(w), None, Some((iw, ih))) => (w, w * ih / iw),
            (None, Some(h), Some((iw, ih))) => (h * iw / ih, h),
            (Some(w), None, None) => (w, default_h),
            (None, Some(h), None) => (default_w, h),
            (None, None, Some(size)) => size,
            (None, None, None) => (default_w, default_h),
        };

        Size::new(w, h)
            .fit_width(content_width)
            .fit_height(self.ctx.geometry.max_image_height())
    }

    fn draw_image_placeholder(&mut self, rect: Rect) {
        self.surface.set_draw_color(self.config.placeholder_color);
        self.surface.set_line_width(self.config.cell_border_width);
        self.surface.rect(rect);
        self.surface.set_draw_color(Color::BLACK);

        let size = self.config.placeholder_font_size;
        let font = Font::regular(self.ctx.font_family, size);
        self.surface.set_font(font);
        let x = rect.center_x() - text_width(PLACEHOLDER_LABEL, &font) / 2.0;
        let y = rect.y + rect.height / 2.0 + self.baseline(size) / 2.0;
        self.surface.text(PLACEHOLDER_LABEL, x, y);
    }
}

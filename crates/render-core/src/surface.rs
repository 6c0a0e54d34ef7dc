use crate::error::RenderError;
use folio_style::{FontFamily, FontWeight};
use folio_types::{Color, Rect};

/// A concrete font selection: family, weight and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_pt: f32,
}

impl Font {
    pub fn new(family: FontFamily, weight: FontWeight, size_pt: f32) -> Self {
        Self {
            family,
            weight,
            size_pt,
        }
    }

    pub fn regular(family: FontFamily, size_pt: f32) -> Self {
        Self::new(family, FontWeight::Normal, size_pt)
    }

    pub fn bold(family: FontFamily, size_pt: f32) -> Self {
        Self::new(family, FontWeight::Bold, size_pt)
    }
}

/// Document-level metadata written when the surface is saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

/// A page-oriented drawing target.
///
/// Coordinates are millimeters from the top-left corner of the current page;
/// text `y` is the baseline. A surface starts with one empty page, so
/// `page_count()` is at least 1 and `add_page` is only called for page breaks.
pub trait PdfSurface {
    fn add_page(&mut self);

    fn page_count(&self) -> usize;

    fn set_font(&mut self, font: Font);

    /// Stroke color for `rect` and `line`.
    fn set_draw_color(&mut self, color: Color);

    /// Stroke width in millimeters.
    fn set_line_width(&mut self, width: f32);

    fn text(&mut self, text: &str, x: f32, y: f32);

    /// Strokes the outline of `rect`.
    fn rect(&mut self, rect: Rect);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Embeds encoded image bytes (PNG, JPEG, GIF) stretched over `rect`.
    fn add_image(&mut self, data: &[u8], rect: Rect) -> Result<(), RenderError>;

    /// Finalizes the document and returns the encoded file.
    fn save(&mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError>;
}

impl<S: PdfSurface + ?Sized> PdfSurface for &mut S {
    fn add_page(&mut self) {
        (**self).add_page()
    }

    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn set_font(&mut self, font: Font) {
        (**self).set_font(font)
    }

    fn set_draw_color(&mut self, color: Color) {
        (**self).set_draw_color(color)
    }

    fn set_line_width(&mut self, width: f32) {
        (**self).set_line_width(width)
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        (**self).text(text, x, y)
    }

    fn rect(&mut self, rect: Rect) {
        (**self).rect(rect)
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        (**self).line(x1, y1, x2, y2)
    }

    fn add_image(&mut self, data: &[u8], rect: Rect) -> Result<(), RenderError> {
        (**self).add_image(data, rect)
    }

    fn save(&mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        (**self).save(info)
    }
}

use folio_render_core::PdfSurface;
use folio_style::{FontFamily, PageGeometry};

/// The vertical cursor and page geometry threaded through one export.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Top of the next block, in millimeters from the top of the current page.
    pub y: f32,
    pub geometry: PageGeometry,
    pub font_family: FontFamily,
}

impl RenderContext {
    pub fn new(geometry: PageGeometry, font_family: FontFamily) -> Self {
        Self {
            y: geometry.padding,
            geometry,
            font_family,
        }
    }

    pub fn padding(&self) -> f32 {
        self.geometry.padding
    }

    pub fn content_width(&self) -> f32 {
        self.geometry.content_width()
    }

    /// Starts a new page when `needed` millimeters do not fit below the cursor.
    /// Returns the (possibly reset) cursor.
    pub fn ensure_space<S: PdfSurface + ?Sized>(&mut self, surface: &mut S, needed: f32) -> f32 {
        if self.y + needed > self.geometry.content_bottom() {
            self.new_page(surface);
        }
        self.y
    }

    pub fn new_page<S: PdfSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.add_page();
        self.y = self.geometry.padding;
        log::debug!("Page {} started", surface.page_count());
    }
}

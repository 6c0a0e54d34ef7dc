use crate::error::RenderError;
use crate::surface::{DocumentInfo, Font, PdfSurface};
use folio_types::{Color, Rect};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    AddPage,
    SetFont(Font),
    SetDrawColor(Color),
    SetLineWidth(f32),
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Option<Font>,
        page: usize,
    },
    Rect(Rect),
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Image { rect: Rect, bytes: usize },
    Save(DocumentInfo),
}

/// A [`PdfSurface`] that records calls instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    pages: usize,
    font: Option<Font>,
    fail_images: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            pages: 1,
            font: None,
            fail_images: false,
        }
    }

    /// Every `add_image` call fails, as an undecodable image would.
    pub fn failing_images() -> Self {
        Self {
            fail_images: true,
            ..Self::new()
        }
    }

    pub fn add_page_calls(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::AddPage))
    }

    pub fn rect_calls(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn line_calls(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Line { .. }))
    }

    pub fn image_calls(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Image { .. }))
    }

    /// `(text, x, y, font)` for every text call, in order.
    pub fn texts(&self) -> Vec<(&str, f32, f32, Option<Font>)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, x, y, font, .. } => Some((text.as_str(), *x, *y, *font)),
                _ => None,
            })
            .collect()
    }

    pub fn text_strings(&self) -> Vec<&str> {
        self.texts().into_iter().map(|(t, ..)| t).collect()
    }

    pub fn saved(&self) -> Option<&DocumentInfo> {
        self.calls.iter().find_map(|c| match c {
            DrawCall::Save(info) => Some(info),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl PdfSurface for RecordingSurface {
    fn add_page(&mut self) {
        self.pages += 1;
        self.calls.push(DrawCall::AddPage);
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_font(&mut self, font: Font) {
        self.font = Some(font);
        self.calls.push(DrawCall::SetFont(font));
    }

    fn set_draw_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetDrawColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font,
            page: self.pages,
        });
    }

    fn rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Rect(rect));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn add_image(&mut self, data: &[u8], rect: Rect) -> Result<(), RenderError> {
        if self.fail_images {
            return Err(RenderError::Image("recording surface rejects images".into()));
        }
        self.calls.push(DrawCall::Image {
            rect,
            bytes: data.len(),
        });
        Ok(())
    }

    fn save(&mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        self.calls.push(DrawCall::Save(info.clone()));
        Ok(format!("%recorded {} calls on {} pages", self.calls.len(), self.pages).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::FontFamily;

    #[test]
    fn test_records_text_with_current_font() {
        let mut surface = RecordingSurface::new();
        let font = Font::regular(FontFamily::Serif, 11.0);
        surface.set_font(font);
        surface.text("Hello", 12.0, 20.0);
        surface.add_page();
        surface.text("World", 12.0, 20.0);

        assert_eq!(surface.page_count(), 2);
        assert_eq!(surface.add_page_calls(), 1);
        assert_eq!(surface.texts()[0], ("Hello", 12.0, 20.0, Some(font)));
        assert!(matches!(surface.calls.last(), Some(DrawCall::Text { page: 2, .. })));
    }

    #[test]
    fn test_failing_images() {
        let mut surface = RecordingSurface::failing_images();
        assert!(surface.add_image(&[1, 2, 3], Rect::default()).is_err());
        assert_eq!(surface.image_calls(), 0);

        let mut ok = RecordingSurface::new();
        ok.add_image(&[1, 2, 3], Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(ok.image_calls(), 1);
    }

    #[test]
    fn test_save_is_recorded() {
        let mut surface = RecordingSurface::new();
        let info = DocumentInfo {
            title: "Report".into(),
            producer: "test".into(),
        };
        let bytes = surface.save(&info).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(surface.saved(), Some(&info));
    }
}

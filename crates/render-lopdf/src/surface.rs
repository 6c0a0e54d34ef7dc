use crate::encoding::{encode_win_ansi, pdf_text_string};
use crate::images::encode_image;
use folio_render_core::utils::{flip_y, mm_to_pt, standard_font_name};
use folio_render_core::{DocumentInfo, Font, PdfSurface, RenderError};
use folio_style::{FontFamily, FontWeight, PageGeometry};
use folio_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

const FONTS: [(FontFamily, FontWeight); 6] = [
    (FontFamily::Sans, FontWeight::Normal),
    (FontFamily::Sans, FontWeight::Bold),
    (FontFamily::Serif, FontWeight::Normal),
    (FontFamily::Serif, FontWeight::Bold),
    (FontFamily::Mono, FontWeight::Normal),
    (FontFamily::Mono, FontWeight::Bold),
];

fn font_resource_name(family: FontFamily, weight: FontWeight) -> String {
    let index = FONTS
        .iter()
        .position(|&(f, w)| f == family && w == weight)
        .unwrap_or(0);
    format!("F{}", index + 1)
}

/// A [`PdfSurface`] that builds a PDF document in memory.
pub struct LopdfSurface {
    doc: Document,
    width_pt: f32,
    height_pt: f32,
    pages: Vec<Vec<Operation>>,
    xobjects: Dictionary,
    image_count: usize,
    font: Font,
    draw_color: Color,
    line_width: f32,
}

impl LopdfSurface {
    /// A surface whose pages measure `width` × `height` millimeters.
    pub fn new(width: f32, height: f32) -> Self {
        let mut surface = Self {
            doc: Document::with_version("1.5"),
            width_pt: mm_to_pt(width),
            height_pt: mm_to_pt(height),
            pages: Vec::new(),
            xobjects: Dictionary::new(),
            image_count: 0,
            font: Font::regular(FontFamily::Sans, 11.0),
            draw_color: Color::BLACK,
            line_width: 0.2,
        };
        surface.add_page();
        surface
    }

    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        Self::new(geometry.width, geometry.height)
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops().push(Operation::new(operator, operands));
    }

    fn x(&self, x_mm: f32) -> f32 {
        mm_to_pt(x_mm)
    }

    fn y(&self, y_mm: f32) -> f32 {
        flip_y(mm_to_pt(y_mm), self.height_pt)
    }

    fn push_stroke_state(&mut self) {
        let (r, g, b) = self.draw_color.to_unit();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        let width = mm_to_pt(self.line_width);
        self.push("w", vec![width.into()]);
    }

    fn build(&mut self, info: &DocumentInfo) -> Result<Document, RenderError> {
        let mut doc = std::mem::replace(&mut self.doc, Document::with_version("1.5"));
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (family, weight) in FONTS {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => standard_font_name(family, weight),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font_resource_name(family, weight), Object::Dictionary(font));
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
            "XObject" => self.xobjects.clone(),
        });

        let mut kids = Vec::with_capacity(self.pages.len());
        for operations in &self.pages {
            let content = Content {
                operations: operations.clone(),
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), self.width_pt.into(), self.height_pt.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let creation_date = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        let info_id: ObjectId = doc.add_object(dictionary! {
            "Title" => pdf_text_string(&info.title),
            "Producer" => pdf_text_string(&info.producer),
            "CreationDate" => Object::String(creation_date.into_bytes(), StringFormat::Literal),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        Ok(doc)
    }
}

impl PdfSurface for LopdfSurface {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
        self.push_stroke_state();
        log::debug!("Started PDF page {}", self.pages.len());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
        let (r, g, b) = color.to_unit();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.push("w", vec![mm_to_pt(width).into()]);
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let name = font_resource_name(self.font.family, self.font.weight);
        let (x, y) = (self.x(x), self.y(y));
        let size = self.font.size_pt;
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(name.into_bytes()), size.into()]);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn rect(&mut self, rect: Rect) {
        let x = self.x(rect.x);
        let y = self.y(rect.bottom());
        let (w, h) = (mm_to_pt(rect.width), mm_to_pt(rect.height));
        self.push("re", vec![x.into(), y.into(), w.into(), h.into()]);
        self.push("S", vec![]);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (x1, y1, x2, y2) = (self.x(x1), self.y(y1), self.x(x2), self.y(y2));
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    fn add_image(&mut self, data: &[u8], rect: Rect) -> Result<(), RenderError> {
        let encoded = encode_image(data)?;
        self.image_count += 1;
        let name = format!("Im{}", self.image_count);
        let id = self.doc.add_object(encoded.stream);
        self.xobjects.set(name.as_bytes(), Object::Reference(id));
        log::debug!(
            "Embedded {}x{} image as /{}",
            encoded.width,
            encoded.height,
            name
        );

        let (w, h) = (mm_to_pt(rect.width), mm_to_pt(rect.height));
        let (x, y) = (self.x(rect.x), self.y(rect.bottom()));
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![w.into(), 0.0f32.into(), 0.0f32.into(), h.into(), x.into(), y.into()],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn save(&mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        let mut doc = self.build(info)?;
        doc.compress();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Annual Report".into(),
            producer: "folio".into(),
        }
    }

    #[test]
    fn test_single_page_text_round_trips_through_lopdf() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut surface = LopdfSurface::from_geometry(&PageGeometry::new(210.0, 15.0));
        surface.set_font(Font::bold(FontFamily::Serif, 18.0));
        surface.text("Quarterly results", 15.0, 25.0);

        let bytes = surface.save(&info()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Quarterly results"), "got {text:?}");
    }

    #[test]
    fn test_pages_and_info_dictionary() {
        let mut surface = LopdfSurface::new(260.0, 297.0);
        surface.text("one", 12.0, 20.0);
        surface.add_page();
        surface.text("two", 12.0, 20.0);
        assert_eq!(surface.page_count(), 2);

        let bytes = surface.save(&info()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let info_ref = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_ref).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Annual Report");
        assert!(info.has(b"CreationDate"));
    }

    #[test]
    fn test_media_box_matches_page_width() {
        let mut surface = LopdfSurface::new(330.0, 297.0);
        let bytes = surface.save(&info()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let width = media_box[2].as_float().unwrap();
        assert!((width - mm_to_pt(330.0)).abs() < 0.01);
    }

    #[test]
    fn test_image_embedding_and_failure() {
        let mut png = Cursor::new(Vec::new());
        RgbImage::new(4, 4).write_to(&mut png, ImageFormat::Png).unwrap();

        let mut surface = LopdfSurface::new(210.0, 297.0);
        surface
            .add_image(png.get_ref(), Rect::new(15.0, 15.0, 40.0, 40.0))
            .unwrap();
        assert!(surface.add_image(b"broken", Rect::default()).is_err());

        let bytes = surface.save(&info()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}

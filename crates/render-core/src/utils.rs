use folio_style::{FontFamily, FontWeight};

/// PDF points per millimeter.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Convert a top-left-origin y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// The standard-14 PostScript name for a family and weight.
pub fn standard_font_name(family: FontFamily, weight: FontWeight) -> &'static str {
    match (family, weight) {
        (FontFamily::Sans, FontWeight::Normal) => "Helvetica",
        (FontFamily::Sans, FontWeight::Bold) => "Helvetica-Bold",
        (FontFamily::Serif, FontWeight::Normal) => "Times-Roman",
        (FontFamily::Serif, FontWeight::Bold) => "Times-Bold",
        (FontFamily::Mono, FontWeight::Normal) => "Courier",
        (FontFamily::Mono, FontWeight::Bold) => "Courier-Bold",
    }
}

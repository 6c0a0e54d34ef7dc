//! PDF output using lopdf.
//!
//! [`LopdfSurface`] buffers one content stream per page, uses the standard-14
//! Type1 fonts with WinAnsi encoding (no font embedding), and embeds images
//! as RGB XObjects.

mod encoding;
mod images;
mod surface;

pub use encoding::{encode_win_ansi, pdf_text_string};
pub use surface::LopdfSurface;

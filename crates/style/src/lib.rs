pub mod dimension;
pub mod font;
pub mod options;
pub mod page;
pub mod parsers;
pub mod text;

pub use dimension::{Dimension, PT_TO_MM, PX_TO_MM};
pub use font::{FontFamily, FontWeight};
pub use options::ExportOptions;
pub use page::{PAGE_HEIGHT_MM, PageGeometry, PageWidth};
pub use parsers::{InlineStyle, StyleParseError};
pub use text::TextAlign;

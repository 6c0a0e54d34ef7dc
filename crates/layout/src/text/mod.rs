//! Text layout primitives: whitespace handling, greedy word wrap, truncation
//! and line metrics.

mod wrapper;

pub use wrapper::{collapse_whitespace, truncate_to_width, wrap_text};

use folio_style::PT_TO_MM;

/// Height of one line of text set at `size_pt`, in millimeters.
pub fn line_height(size_pt: f32, factor: f32) -> f32 {
    size_pt * factor * PT_TO_MM
}

/// Distance from the top of a line to its baseline, in millimeters.
pub fn baseline_offset(size_pt: f32, ratio: f32) -> f32 {
    size_pt * PT_TO_MM * ratio
}

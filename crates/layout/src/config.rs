//! Fixed typographic constants of the exporter. All lengths are millimeters,
//! all font sizes points.

use folio_types::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub body_font_size: f32,
    /// h1, h2 and h3 sizes; deeper headings use the h3 size.
    pub heading_sizes: [f32; 3],
    /// Space before and after an h1.
    pub h1_spacing: (f32, f32),
    /// Space before and after h2 to h6.
    pub heading_spacing: (f32, f32),
    /// Added after a paragraph that has visible text.
    pub paragraph_spacing: f32,
    pub list_indent: f32,
    /// Added after a top-level list.
    pub list_spacing: f32,
    pub table_font_size: f32,
    pub cell_padding: f32,
    pub cell_border_width: f32,
    pub header_rule_width: f32,
    pub table_spacing: f32,
    pub rule_spacing: f32,
    pub rule_width: f32,
    pub image_spacing: f32,
    /// Baseline distance below the top of a line, as a fraction of the font size.
    pub baseline_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
    /// Image size in CSS pixels when neither attributes nor the image say otherwise.
    pub default_image_px: (f32, f32),
    pub placeholder_color: Color,
    pub placeholder_font_size: f32,
    /// Recursion limit for the content tree walk.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            body_font_size: 11.0,
            heading_sizes: [18.0, 15.0, 13.0],
            h1_spacing: (6.0, 4.0),
            heading_spacing: (4.0, 3.0),
            paragraph_spacing: 3.0,
            list_indent: 5.0,
            list_spacing: 2.0,
            table_font_size: 10.0,
            cell_padding: 2.0,
            cell_border_width: 0.2,
            header_rule_width: 0.5,
            table_spacing: 4.0,
            rule_spacing: 4.0,
            rule_width: 0.3,
            image_spacing: 4.0,
            baseline_ratio: 0.8,
            line_height_factor: 1.4,
            default_image_px: (200.0, 150.0),
            placeholder_color: Color::gray(160),
            placeholder_font_size: 10.0,
            max_depth: 256,
        }
    }
}

impl LayoutConfig {
    pub fn heading_size(&self, level: u8) -> f32 {
        let index = usize::from(level.clamp(1, 3)) - 1;
        self.heading_sizes[index]
    }

    pub fn heading_spacing(&self, level: u8) -> (f32, f32) {
        if level <= 1 {
            self.h1_spacing
        } else {
            self.heading_spacing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_lookup() {
        let config = LayoutConfig::default();
        assert_eq!(config.heading_size(1), 18.0);
        assert_eq!(config.heading_size(2), 15.0);
        assert_eq!(config.heading_size(3), 13.0);
        assert_eq!(config.heading_size(6), 13.0);
        assert_eq!(config.heading_spacing(1), (6.0, 4.0));
        assert_eq!(config.heading_spacing(4), (4.0, 3.0));
    }
}

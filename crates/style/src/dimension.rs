//! Lengths found in element attributes and inline styles.

use serde::{Deserialize, Serialize};

/// Millimeters per CSS pixel (96 dpi).
pub const PX_TO_MM: f32 = 0.264583;
/// Millimeters per typographic point.
pub const PT_TO_MM: f32 = 0.352778;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Px(f32),
    Pt(f32),
    Mm(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    /// The length in millimeters, if it is an absolute length.
    pub fn to_mm(self) -> Option<f32> {
        match self {
            Dimension::Px(v) => Some(v * PX_TO_MM),
            Dimension::Pt(v) => Some(v * PT_TO_MM),
            Dimension::Mm(v) => Some(v),
            Dimension::Percent(_) | Dimension::Auto => None,
        }
    }

    /// Resolves a percentage against `reference_mm`; absolute lengths convert directly.
    pub fn resolve_mm(self, reference_mm: f32) -> Option<f32> {
        match self {
            Dimension::Percent(p) => Some(reference_mm * p / 100.0),
            other => other.to_mm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_conversion_factor() {
        let mm = Dimension::Px(200.0).to_mm().unwrap();
        assert!((mm - 52.9166).abs() < 1e-3);
    }

    #[test]
    fn test_pt_conversion_factor() {
        let mm = Dimension::Pt(12.0).to_mm().unwrap();
        assert!((mm - 12.0 * PT_TO_MM).abs() < 1e-6);
    }

    #[test]
    fn test_relative_lengths() {
        assert_eq!(Dimension::Auto.to_mm(), None);
        assert_eq!(Dimension::Percent(50.0).resolve_mm(200.0), Some(100.0));
    }
}

//! Physical page geometry, in millimeters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page height shared by every page width preset.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Extra head-room subtracted from the printable height when capping image height.
const IMAGE_HEIGHT_ALLOWANCE_MM: f32 = 10.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageWidth {
    /// A4 portrait.
    Narrow,
    #[default]
    Medium,
    Wide,
}

impl PageWidth {
    pub fn geometry(self) -> PageGeometry {
        match self {
            PageWidth::Narrow => PageGeometry::new(210.0, 15.0),
            PageWidth::Medium => PageGeometry::new(260.0, 12.0),
            PageWidth::Wide => PageGeometry::new(330.0, 12.0),
        }
    }
}

impl FromStr for PageWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" => Ok(PageWidth::Narrow),
            "medium" => Ok(PageWidth::Medium),
            "wide" => Ok(PageWidth::Wide),
            _ => Err(format!("Invalid page width '{}': expected narrow, medium or wide", s)),
        }
    }
}

impl fmt::Display for PageWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageWidth::Narrow => "narrow",
            PageWidth::Medium => "medium",
            PageWidth::Wide => "wide",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Uniform padding on all four sides.
    pub padding: f32,
}

impl PageGeometry {
    pub fn new(width: f32, padding: f32) -> Self {
        Self {
            width,
            height: PAGE_HEIGHT_MM,
            padding,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// The lowest y a block may extend to before a new page is needed.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.padding
    }

    pub fn max_image_height(&self) -> f32 {
        self.height - 2.0 * self.padding - IMAGE_HEIGHT_ALLOWANCE_MM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let narrow = PageWidth::Narrow.geometry();
        assert_eq!(narrow.width, 210.0);
        assert_eq!(narrow.padding, 15.0);
        assert_eq!(narrow.content_width(), 180.0);

        let medium = PageWidth::default().geometry();
        assert_eq!(medium.width, 260.0);
        assert_eq!(medium.content_width(), 236.0);

        let wide = PageWidth::Wide.geometry();
        assert_eq!(wide.content_width(), 306.0);
        assert_eq!(wide.height, 297.0);
    }

    #[test]
    fn test_limits() {
        let g = PageWidth::Medium.geometry();
        assert_eq!(g.content_bottom(), 285.0);
        assert_eq!(g.max_image_height(), 263.0);
    }
}

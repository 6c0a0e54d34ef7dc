use serde::{Deserialize, Serialize};

/// Horizontal alignment of a block (text lines or images) within the content box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Parses a CSS `text-align` / `data-align` keyword. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "start" | "justify" => Some(TextAlign::Left),
            "center" | "middle" => Some(TextAlign::Center),
            "right" | "end" => Some(TextAlign::Right),
            _ => None,
        }
    }

    /// Left edge of an item of `item_width` placed inside `[x, x + available]`.
    pub fn offset(self, x: f32, available: f32, item_width: f32) -> f32 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x + (available - item_width) / 2.0,
            TextAlign::Right => x + available - item_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(TextAlign::parse("Center"), Some(TextAlign::Center));
        assert_eq!(TextAlign::parse(" right "), Some(TextAlign::Right));
        assert_eq!(TextAlign::parse("justify"), Some(TextAlign::Left));
        assert_eq!(TextAlign::parse("sideways"), None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(TextAlign::Left.offset(10.0, 100.0, 40.0), 10.0);
        assert_eq!(TextAlign::Center.offset(10.0, 100.0, 40.0), 40.0);
        assert_eq!(TextAlign::Right.offset(10.0, 100.0, 40.0), 70.0);
    }
}

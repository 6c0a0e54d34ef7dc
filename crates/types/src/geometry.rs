//! Geometry in physical page units (millimeters, top-left origin).

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly scales the size down so that `width <= max_width`. Never scales up.
    pub fn fit_width(self, max_width: f32) -> Self {
        if self.width > max_width && self.width > 0.0 {
            let scale = max_width / self.width;
            Self::new(self.width * scale, self.height * scale)
        } else {
            self
        }
    }

    /// Uniformly scales the size down so that `height <= max_height`. Never scales up.
    pub fn fit_height(self, max_height: f32) -> Self {
        if self.height > max_height && self.height > 0.0 {
            let scale = max_height / self.height;
            Self::new(self.width * scale, self.height * scale)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_scales_proportionally() {
        let size = Size::new(200.0, 100.0).fit_width(100.0);
        assert_eq!(size, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_fit_never_scales_up() {
        let size = Size::new(20.0, 10.0);
        assert_eq!(size.fit_width(100.0), size);
        assert_eq!(size.fit_height(100.0), size);
    }

    #[test]
    fn test_fit_height_after_width() {
        let size = Size::new(400.0, 800.0).fit_width(200.0).fit_height(250.0);
        assert!((size.height - 250.0).abs() < 1e-4);
        assert!((size.width - 125.0).abs() < 1e-4);
    }
}

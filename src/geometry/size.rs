#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Zero, negative, or non-finite dimensions. Nothing sensible can be
    /// scaled against such a size.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 100.0).is_degenerate());
        assert!(Size::new(100.0, 0.0).is_degenerate());
        assert!(Size::new(-1.0, 100.0).is_degenerate());
        assert!(Size::new(f32::NAN, 100.0).is_degenerate());
        assert!(!Size::new(390.0, 844.0).is_degenerate());
    }

    #[test]
    fn portrait_check() {
        assert!(Size::new(390.0, 844.0).is_portrait());
        assert!(!Size::new(844.0, 390.0).is_portrait());
        assert!(!Size::new(100.0, 100.0).is_portrait());
    }
}

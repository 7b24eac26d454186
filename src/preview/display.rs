use crate::geometry::Size;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// Intrinsic image size is zero or otherwise unusable.
    InvalidImage,
    /// A gesture arrived before the first layout pass.
    ViewportUnset,
}

/// Size the image occupies when scaled to fill the viewport: the constraining
/// axis matches the viewport exactly, the other axis overflows.
pub fn displayed_size(image: Size, viewport: Size) -> Result<Size, GeometryError> {
    if image.is_degenerate() {
        return Err(GeometryError::InvalidImage);
    }

    let image_ratio = image.aspect_ratio();
    let viewport_ratio = viewport.aspect_ratio();

    if image_ratio > viewport_ratio {
        // image relatively wider, so height pins to the viewport and width spills
        Ok(Size::new(viewport.height * image_ratio, viewport.height))
    } else {
        Ok(Size::new(viewport.width, viewport.width / image_ratio))
    }
}

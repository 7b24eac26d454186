use crate::geometry::Offset;
use crate::preview::pan::PanGestureController;
use tracing::debug;

/// Scale applied while zoomed in. Matched to the shipped double-tap feel.
pub const ZOOM_SCALE: f32 = 1.2;

impl PanGestureController {
    /// Toggles between the resting and zoomed state. Offsets restart from the
    /// resting position on every transition, in both directions.
    pub fn on_double_tap(&mut self) {
        if self.is_zoomed {
            self.is_zoomed = false;
            self.scale = 1.0;
        } else {
            self.is_zoomed = true;
            self.scale = ZOOM_SCALE;
        }

        self.session = None;
        self.committed = Offset::zero();

        debug!(zoomed = self.is_zoomed, scale = self.scale, "double tap");
    }
}

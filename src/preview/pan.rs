use crate::geometry::{Offset, Size};
use crate::preview::bounds::PanBounds;
use crate::preview::display::{displayed_size, GeometryError};
use crate::preview::elastic::clamp_offset;
use tracing::{trace, warn};

/// One active drag. Opened on the first drag-change of a gesture, closed on
/// drag-end, discarded wholesale when the preview is torn down mid-drag.
#[derive(Debug, Copy, Clone)]
pub(crate) struct GestureSession {
    /// Committed offset at the moment the drag began. Translations are
    /// cumulative from the host, so every change re-derives from this.
    pub(crate) start: Offset,
    pub(crate) current: Offset,
}

/// Horizontal pan state machine for a zoomed preview image.
///
/// The host feeds gesture events in arrival order; each is handled
/// synchronously, so there is never more than one open session. Offsets shown
/// mid-drag may sit in the elastic region; the committed offset is snapped
/// back inside `[-max_pan_width, 0]` on every drag end.
pub struct PanGestureController {
    pub(crate) viewport: Option<Size>,
    pub(crate) image: Option<Size>,
    pub(crate) committed: Offset,
    pub(crate) session: Option<GestureSession>,
    pub(crate) is_zoomed: bool,
    pub(crate) scale: f32,
}

impl Default for PanGestureController {
    fn default() -> Self {
        Self {
            viewport: None,
            image: None,
            committed: Offset::zero(),
            session: None,
            is_zoomed: false,
            scale: 1.0,
        }
    }
}

impl PanGestureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the resting state. Hosts call this when a new image replaces
    /// the current one; the viewport and image sizes stay as last reported.
    pub fn reset(&mut self) {
        self.committed = Offset::zero();
        self.session = None;
        self.is_zoomed = false;
        self.scale = 1.0;
    }

    pub fn on_viewport_resize(&mut self, size: Size) {
        // bounds are derived per event, so the new size takes effect on the
        // next gesture without touching the committed offset
        self.viewport = Some(size);
    }

    pub fn set_image_size(&mut self, size: Option<Size>) {
        match size {
            Some(s) if s.is_degenerate() => {
                warn!(
                    width = s.width,
                    height = s.height,
                    "degenerate image size, panning disabled"
                );
                self.image = None;
            }
            other => self.image = other,
        }
    }

    pub fn on_drag_change(&mut self, translation: Offset) {
        if !self.is_zoomed {
            return;
        }
        let Ok(bounds) = self.current_bounds() else {
            // gesture before first layout, nothing to pan against
            return;
        };

        let session = self.session.get_or_insert(GestureSession {
            start: self.committed,
            current: self.committed,
        });

        let raw = session.start.x + translation.x;
        let clamped = clamp_offset(raw, &bounds);
        session.current = Offset::new(clamped, 0.0);

        trace!(raw, clamped, max_pan_width = bounds.max_pan_width, "drag change");
    }

    /// Snaps the transient offset to the nearest legal bound and commits it
    /// as the baseline for the next gesture.
    pub fn on_drag_end(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        // recompute in case the viewport resized mid-drag
        let Ok(bounds) = self.current_bounds() else {
            return;
        };

        let snapped = session.current.x.clamp(-bounds.max_pan_width, 0.0);

        self.committed = Offset::new(snapped, 0.0);
        trace!(snapped, "drag end");
    }

    /// Mid-drag teardown: the open session is dropped without committing.
    pub fn cancel_drag(&mut self) {
        self.session = None;
    }

    pub fn render_offset(&self) -> Offset {
        match self.session {
            Some(session) => session.current,
            None => self.committed,
        }
    }

    pub fn render_scale(&self) -> f32 {
        self.scale
    }

    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    /// Bounds for the current viewport and image, or why none exist yet.
    fn current_bounds(&self) -> Result<PanBounds, GeometryError> {
        let viewport = self.viewport.ok_or(GeometryError::ViewportUnset)?;
        Ok(PanBounds::compute(self.displayed(viewport), viewport))
    }

    /// Displayed size under fill scaling, falling back to the viewport (no
    /// pan slack) when the image is missing or unusable.
    fn displayed(&self, viewport: Size) -> Size {
        self.image
            .and_then(|image| displayed_size(image, viewport).ok())
            .unwrap_or(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Size = Size {
        width: 390.0,
        height: 844.0,
    };
    const LANDSCAPE: Size = Size {
        width: 3000.0,
        height: 1200.0,
    };

    fn zoomed_controller(image: Size) -> PanGestureController {
        let mut controller = PanGestureController::new();
        controller.on_viewport_resize(VIEWPORT);
        controller.set_image_size(Some(image));
        controller.on_double_tap();
        controller
    }

    #[test]
    fn drag_ignored_while_not_zoomed() {
        let mut controller = PanGestureController::new();
        controller.on_viewport_resize(VIEWPORT);
        controller.set_image_size(Some(LANDSCAPE));

        controller.on_drag_change(Offset::new(-200.0, 0.0));
        controller.on_drag_end();

        assert_eq!(controller.render_offset(), Offset::zero());
    }

    #[test]
    fn drag_ignored_before_first_layout() {
        let mut controller = PanGestureController::new();
        controller.set_image_size(Some(LANDSCAPE));
        controller.on_double_tap();

        controller.on_drag_change(Offset::new(-200.0, 0.0));

        assert_eq!(controller.render_offset(), Offset::zero());
    }

    #[test]
    fn in_range_drag_tracks_translation() {
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(-300.0, 0.0));
        assert_relative_eq!(controller.render_offset().x, -300.0);

        controller.on_drag_end();
        assert_relative_eq!(controller.render_offset().x, -300.0);
    }

    #[test]
    fn overpan_right_is_damped_then_snaps_back() {
        // displayed width 2110, so 500 of rightward drag overshoots the
        // resting position and only a fifth of it shows
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(500.0, 0.0));
        assert_relative_eq!(controller.render_offset().x, 100.0);

        controller.on_drag_end();
        assert_relative_eq!(controller.render_offset().x, 0.0);
    }

    #[test]
    fn overpan_left_snaps_to_far_bound() {
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(-1900.0, 0.0));
        let shown = controller.render_offset().x;
        assert_relative_eq!(shown, -1720.0 - 180.0 * 0.2);

        controller.on_drag_end();
        assert_relative_eq!(controller.render_offset().x, -1720.0);
    }

    #[test]
    fn committed_offset_carries_into_next_gesture() {
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(-400.0, 0.0));
        controller.on_drag_end();

        controller.on_drag_change(Offset::new(-100.0, 0.0));
        assert_relative_eq!(controller.render_offset().x, -500.0);
    }

    #[test]
    fn cancel_discards_transient_offset() {
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(-400.0, 0.0));
        controller.on_drag_end();

        controller.on_drag_change(Offset::new(-300.0, 0.0));
        controller.cancel_drag();

        assert_relative_eq!(controller.render_offset().x, -400.0);
    }

    #[test]
    fn missing_image_leaves_no_pan_slack() {
        let mut controller = PanGestureController::new();
        controller.on_viewport_resize(VIEWPORT);
        controller.on_double_tap();

        // everything is overpan, so the drag is damped and snaps home
        controller.on_drag_change(Offset::new(-50.0, 0.0));
        assert_relative_eq!(controller.render_offset().x, -10.0);

        controller.on_drag_end();
        assert_relative_eq!(controller.render_offset().x, 0.0);
    }

    #[test]
    fn degenerate_image_treated_as_missing() {
        let mut controller = PanGestureController::new();
        controller.on_viewport_resize(VIEWPORT);
        controller.set_image_size(Some(Size::new(1200.0, 0.0)));

        assert!(controller.image.is_none());
    }

    #[test]
    fn reset_returns_to_resting_state() {
        let mut controller = zoomed_controller(LANDSCAPE);
        controller.on_drag_change(Offset::new(-400.0, 0.0));
        controller.on_drag_end();

        controller.reset();

        assert_eq!(controller.render_offset(), Offset::zero());
        assert!(!controller.is_zoomed());
        assert_relative_eq!(controller.render_scale(), 1.0);
    }

    #[test]
    fn vertical_translation_never_leaks_into_offset() {
        let mut controller = zoomed_controller(LANDSCAPE);

        controller.on_drag_change(Offset::new(-100.0, 250.0));
        assert_relative_eq!(controller.render_offset().y, 0.0);

        controller.on_drag_end();
        assert_relative_eq!(controller.render_offset().y, 0.0);
    }
}

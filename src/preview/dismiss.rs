use crate::geometry::Offset;
use tracing::debug;

/// Distance a drag has to travel, on either axis, before it reads as a
/// swipe-away. Zero keeps the original behavior of dismissing on any
/// unzoomed drag.
const DEFAULT_DISMISS_THRESHOLD: f32 = 0.0;

/// Turns a completed drag on the unzoomed preview into a dismiss request.
///
/// Only consulted while the image is not zoomed; zoomed drags belong to the
/// pan controller and never reach this adapter.
pub struct DismissGestureAdapter {
    threshold: f32,
    on_dismiss: Option<Box<dyn FnMut()>>,
}

impl Default for DismissGestureAdapter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DISMISS_THRESHOLD,
            on_dismiss: None,
        }
    }
}

impl DismissGestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn connect_dismiss(&mut self, callback: impl FnMut() + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Returns true when the finished drag reads as a swipe-away, firing the
    /// registered callback.
    pub fn on_drag_end(&mut self, final_translation: Offset) -> bool {
        let past_threshold = final_translation.x.abs() > self.threshold
            || final_translation.y.abs() > self.threshold;

        if !past_threshold {
            return false;
        }

        debug!(
            x = final_translation.x,
            y = final_translation.y,
            "drag read as dismiss"
        );
        self.dismiss();
        true
    }

    /// Explicit dismissal, e.g. the close button.
    pub fn dismiss(&mut self) {
        if let Some(callback) = self.on_dismiss.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn any_movement_dismisses_by_default() {
        let mut adapter = DismissGestureAdapter::new();

        assert!(adapter.on_drag_end(Offset::new(0.5, 0.0)));
        assert!(adapter.on_drag_end(Offset::new(0.0, -0.5)));
    }

    #[test]
    fn zero_translation_never_dismisses() {
        let mut adapter = DismissGestureAdapter::new();

        assert!(!adapter.on_drag_end(Offset::zero()));
    }

    #[test]
    fn threshold_gates_either_axis() {
        let mut adapter = DismissGestureAdapter::with_threshold(80.0);

        assert!(!adapter.on_drag_end(Offset::new(40.0, 40.0)));
        assert!(adapter.on_drag_end(Offset::new(-100.0, 0.0)));
        assert!(adapter.on_drag_end(Offset::new(0.0, 120.0)));
    }

    #[test]
    fn callback_fires_once_per_dismissing_drag() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let mut adapter = DismissGestureAdapter::with_threshold(80.0);
        adapter.connect_dismiss(move || counter.set(counter.get() + 1));

        adapter.on_drag_end(Offset::new(10.0, 0.0));
        assert_eq!(fired.get(), 0);

        adapter.on_drag_end(Offset::new(200.0, 0.0));
        assert_eq!(fired.get(), 1);
    }
}

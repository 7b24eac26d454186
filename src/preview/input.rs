use crate::geometry::Offset;

/// Gesture lifecycle events as the host reports them. Drag translations are
/// cumulative from the start of the gesture, matching touch frameworks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureEvent {
    DragChange(Offset),
    DragEnd(Offset),
    DoubleTap,
    CloseRequested,
}

/// Who consumes drag events in the current zoom state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragTarget {
    Pan,
    Dismiss,
}

impl DragTarget {
    pub fn is_pan(&self) -> bool {
        matches!(self, DragTarget::Pan)
    }

    pub fn is_dismiss(&self) -> bool {
        matches!(self, DragTarget::Dismiss)
    }

    /// Zoomed drags pan the image; unzoomed drags swipe the preview away.
    pub fn for_zoom_state(is_zoomed: bool) -> DragTarget {
        if is_zoomed {
            DragTarget::Pan
        } else {
            DragTarget::Dismiss
        }
    }
}

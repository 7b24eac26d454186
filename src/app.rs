use crate::geometry::{Offset, Size};
use crate::loader::LoadState;
use crate::preview::input::{DragTarget, GestureEvent};
use crate::preview::{DismissGestureAdapter, PanGestureController};
use tracing::info;

/// Snapshot of everything the rendering layer needs per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderState {
    pub offset: Offset,
    pub scale: f32,
    pub is_zoomed: bool,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionOutcome {
    Render(RenderState),
    Dismissed,
}

/// One preview from image load to dismissal. Owns the gesture controller and
/// the dismiss adapter and routes host events between them.
pub struct PreviewSession {
    controller: PanGestureController,
    dismiss: DismissGestureAdapter,
    load_state: LoadState,
    dismissed: bool,
}

impl PreviewSession {
    pub fn new(viewport: Size) -> Self {
        let mut controller = PanGestureController::new();
        controller.on_viewport_resize(viewport);

        Self {
            controller,
            dismiss: DismissGestureAdapter::new(),
            load_state: LoadState::Loading,
            dismissed: false,
        }
    }

    pub fn connect_dismiss(&mut self, callback: impl FnMut() + 'static) {
        self.dismiss.connect_dismiss(callback);
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Collaborator delivered the image; gesture state restarts for it.
    pub fn image_ready(&mut self, size: Size) {
        info!(width = size.width, height = size.height, "image ready");
        self.load_state = LoadState::Ready(size);
        self.controller.reset();
        self.controller.set_image_size(Some(size));
    }

    /// Load failed upstream; the preview stays up showing the error state,
    /// with panning pinned off.
    pub fn image_failed(&mut self) {
        self.load_state = LoadState::Failed;
        self.controller.reset();
        self.controller.set_image_size(None);
    }

    pub fn on_viewport_resize(&mut self, size: Size) {
        self.controller.on_viewport_resize(size);
    }

    pub fn handle_event(&mut self, event: GestureEvent) -> SessionOutcome {
        if self.dismissed {
            return SessionOutcome::Dismissed;
        }

        match event {
            GestureEvent::DoubleTap => {
                // zoom only exists once there is an image to zoom into
                if self.load_state.is_ready() {
                    self.controller.on_double_tap();
                }
            }
            GestureEvent::DragChange(translation) => {
                if DragTarget::for_zoom_state(self.controller.is_zoomed()).is_pan() {
                    self.controller.on_drag_change(translation);
                }
            }
            GestureEvent::DragEnd(translation) => {
                match DragTarget::for_zoom_state(self.controller.is_zoomed()) {
                    DragTarget::Pan => self.controller.on_drag_end(),
                    DragTarget::Dismiss => {
                        if self.dismiss.on_drag_end(translation) {
                            self.dismissed = true;
                        }
                    }
                }
            }
            GestureEvent::CloseRequested => {
                self.dismiss.dismiss();
                self.dismissed = true;
            }
        }

        if self.dismissed {
            // teardown mid-drag must not commit a partial offset
            self.controller.cancel_drag();
            SessionOutcome::Dismissed
        } else {
            SessionOutcome::Render(self.render_state())
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            offset: self.controller.render_offset(),
            scale: self.controller.render_scale(),
            is_zoomed: self.controller.is_zoomed(),
        }
    }
}

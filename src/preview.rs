mod bounds;
mod dismiss;
mod display;
mod elastic;
pub mod input;
mod pan;
mod zoom;

pub use bounds::PanBounds;
pub use dismiss::DismissGestureAdapter;
pub use display::{displayed_size, GeometryError};
pub use elastic::clamp_offset;
pub use pan::PanGestureController;
pub use zoom::ZOOM_SCALE;

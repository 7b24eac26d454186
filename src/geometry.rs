mod offset;
mod size;

pub use offset::Offset;
pub use size::Size;

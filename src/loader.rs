use crate::geometry::Size;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Where the image collaborator currently stands. The pan core only activates
/// once this reaches `Ready` with usable dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Size),
    Failed,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn image_size(&self) -> Option<Size> {
        match self {
            LoadState::Ready(size) => Some(*size),
            _ => None,
        }
    }
}

/// Reads the intrinsic dimensions of an image file off the runtime threads.
/// Only the header is parsed; no pixel data is decoded.
pub async fn load_dimensions(path: &Path) -> Result<Size> {
    let owned = path.to_owned();
    let (width, height) = tokio::task::spawn_blocking(move || {
        image::image_dimensions(&owned)
            .with_context(|| format!("failed to read image header: {}", owned.display()))
    })
    .await??;

    debug!(width, height, path = %path.display(), "image dimensions read");
    Ok(Size::new(width as f32, height as f32))
}

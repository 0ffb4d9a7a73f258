use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{AdforgeError, AdforgeResult};

/// Decoded product cutout in straight-alpha RGBA8.
///
/// Cheap to clone; every render job of a batch shares the same pixels read-only.
#[derive(Clone, Debug)]
pub struct Cutout {
    image: Arc<image::RgbaImage>,
}

impl Cutout {
    /// Wrap an already decoded image. Zero-sized images are rejected.
    pub fn from_image(image: image::RgbaImage) -> AdforgeResult<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(AdforgeError::validation("cutout must be at least 1x1"));
        }
        Ok(Self {
            image: Arc::new(image),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Straight-alpha pixels.
    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }
}

/// Decode encoded image bytes into a [`Cutout`]. Images without alpha become fully opaque.
pub fn decode_cutout(bytes: &[u8]) -> AdforgeResult<Cutout> {
    let dyn_img = image::load_from_memory(bytes).context("decode cutout from memory")?;
    Cutout::from_image(dyn_img.to_rgba8())
}

/// Read and decode the cutout at `path`. Any failure is an [`AdforgeError::Asset`].
pub fn load_cutout(path: &Path) -> AdforgeResult<Cutout> {
    let bytes = std::fs::read(path).map_err(|e| {
        AdforgeError::asset(format!("failed to read cutout '{}': {e}", path.display()))
    })?;
    decode_cutout(&bytes).map_err(|e| {
        AdforgeError::asset(format!("failed to decode cutout '{}': {e}", path.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

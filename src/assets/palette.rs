use std::path::Path;

use crate::foundation::core::Rgb;
use crate::foundation::error::AdforgeResult;

/// Source of an ordered brand palette for a product image. The first color themes the batch.
pub trait PaletteSource {
    /// Colors for the image at `image_path`, most dominant first.
    fn palette(&self, image_path: &Path) -> AdforgeResult<Vec<Rgb>>;
}

/// Palette known up front (command-line flags, request bodies, tests).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedPalette(pub Vec<Rgb>);

impl FixedPalette {
    /// Normalize hex strings; malformed entries become neutral gray.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Self {
        Self(
            colors
                .iter()
                .map(|c| Rgb::from_hex_or_gray(c.as_ref()))
                .collect(),
        )
    }
}

impl PaletteSource for FixedPalette {
    fn palette(&self, _image_path: &Path) -> AdforgeResult<Vec<Rgb>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/palette.rs"]
mod tests;

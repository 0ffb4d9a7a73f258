use serde::{Deserialize, Serialize};

use crate::assets::fonts::{ShapedText, TextEngine};
use crate::foundation::error::AdforgeResult;

/// Linear font-size search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizing {
    /// First (largest) size tried.
    pub start: u32,
    /// Smallest size; used with an overflow flag when nothing fits.
    pub min: u32,
    /// Decrement between attempts.
    pub step: u32,
}

impl Default for FontSizing {
    fn default() -> Self {
        Self {
            start: 80,
            min: 12,
            step: 2,
        }
    }
}

impl FontSizing {
    /// Clamp into a searchable range: `min >= 1`, `step >= 1`, `start >= min`.
    pub fn normalized(self) -> Self {
        let min = self.min.max(1);
        Self {
            start: self.start.max(min),
            min,
            step: self.step.max(1),
        }
    }

    /// Candidate sizes from `start` down to `min`, largest first.
    pub fn candidates(self) -> impl Iterator<Item = u32> {
        let s = self.normalized();
        (s.min..=s.start).rev().step_by(s.step as usize)
    }
}

/// Result of fitting text into a box.
#[derive(Debug)]
pub struct FittedText {
    /// Text shaped at the chosen size.
    pub shaped: ShapedText,
    /// Chosen size in pixels.
    pub size: u32,
    /// `true` when even the minimum size exceeds the box.
    pub overflowed: bool,
}

/// Largest size in `sizing` at which `text` fits inside `max_w` x `max_h`.
///
/// Falls back to `sizing.min` with `overflowed` set when no candidate fits.
pub fn auto_font_size(
    engine: &mut TextEngine,
    text: &str,
    max_w: f32,
    max_h: f32,
    sizing: FontSizing,
) -> AdforgeResult<FittedText> {
    let sizing = sizing.normalized();
    for size in sizing.candidates() {
        let shaped = engine.shape(text, size as f32)?;
        if shaped.width() <= max_w && shaped.height() <= max_h {
            return Ok(FittedText {
                shaped,
                size,
                overflowed: false,
            });
        }
    }

    tracing::debug!(
        chars = text.chars().count(),
        max_w,
        max_h,
        min = sizing.min,
        "text does not fit at minimum size"
    );
    Ok(FittedText {
        shaped: engine.shape(text, sizing.min as f32)?,
        size: sizing.min,
        overflowed: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;

//! Pure-raster quality heuristic for finished creatives.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb;

/// Mean color must lie within this Euclidean distance of the expected color.
pub const COLOR_DISTANCE_LIMIT: f64 = 80.0;
/// Channel standard deviation above this counts as "has contrast".
pub const CONTRAST_MIN_STD: f64 = 25.0;
/// Mean brightness must lie strictly inside this range.
pub const BRIGHTNESS_RANGE: (f64, f64) = (60.0, 230.0);

/// Area of a creative expected to show a particular color, e.g. text over its backdrop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRegion {
    /// `[x, y, width, height]` in pixels. Clipped to the image when scoring.
    pub bbox: [i64; 4],
    /// Dominant color the region should average to.
    pub color: Rgb,
}

/// Score `image` against `regions` in `0.0..=100.0`, rounded to two decimals.
///
/// Each region runs three checks (color distance, contrast, brightness). A region that is empty
/// after clipping fails all three. No regions scores 0.
pub fn score_regions(image: &image::RgbImage, regions: &[ExpectedRegion]) -> f64 {
    if regions.is_empty() {
        return 0.0;
    }
    let passed: u32 = regions.iter().map(|r| region_checks(image, r)).sum();
    let ratio = f64::from(passed) / (3.0 * regions.len() as f64);
    (ratio * 100.0 * 100.0).round() / 100.0
}

/// Decode `path` and score it. Unreadable images score 0.
pub fn score_file(path: &Path, regions: &[ExpectedRegion]) -> f64 {
    match image::open(path) {
        Ok(img) => score_regions(&img.to_rgb8(), regions),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot score unreadable image");
            0.0
        }
    }
}

fn region_checks(image: &image::RgbImage, region: &ExpectedRegion) -> u32 {
    let [x, y, w, h] = region.bbox;
    let x0 = x.clamp(0, i64::from(image.width())) as u32;
    let y0 = y.clamp(0, i64::from(image.height())) as u32;
    let x1 = x.saturating_add(w).clamp(0, i64::from(image.width())) as u32;
    let y1 = y.saturating_add(h).clamp(0, i64::from(image.height())) as u32;
    if x0 >= x1 || y0 >= y1 {
        return 0;
    }

    let mut sum = [0f64; 3];
    let mut sum_sq = 0f64;
    let mut n = 0f64;
    for py in y0..y1 {
        for px in x0..x1 {
            let p = image.get_pixel(px, py).0;
            for c in 0..3 {
                let v = f64::from(p[c]);
                sum[c] += v;
                sum_sq += v * v;
            }
            n += 1.0;
        }
    }

    let mean = sum.map(|s| s / n);
    let brightness = (sum[0] + sum[1] + sum[2]) / (3.0 * n);
    let variance = (sum_sq / (3.0 * n) - brightness * brightness).max(0.0);
    let expected = [region.color.r, region.color.g, region.color.b].map(f64::from);
    let distance = mean
        .iter()
        .zip(expected)
        .map(|(m, e)| (m - e) * (m - e))
        .sum::<f64>()
        .sqrt();

    u32::from(distance < COLOR_DISTANCE_LIMIT)
        + u32::from(variance.sqrt() > CONTRAST_MIN_STD)
        + u32::from(brightness > BRIGHTNESS_RANGE.0 && brightness < BRIGHTNESS_RANGE.1)
}

#[cfg(test)]
#[path = "../tests/unit/validate.rs"]
mod tests;

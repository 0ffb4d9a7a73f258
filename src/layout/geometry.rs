use crate::foundation::core::CanvasSize;

/// Default proportion of the shorter canvas side used as margin.
pub const DEFAULT_MARGIN_SCALE: f64 = 0.06;

/// Aspect-preserving dimensions for `(w, h)` scaled uniformly into `max_w` x `max_h`.
///
/// The limiting side equals its bound exactly and the other side is floored, so the result
/// never exceeds either bound. Both sides are at least 1 px.
pub fn fit_dimensions(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let (w, h) = (u64::from(w.max(1)), u64::from(h.max(1)));
    let (max_w, max_h) = (u64::from(max_w.max(1)), u64::from(max_h.max(1)));

    let (out_w, out_h) = if max_w * h <= max_h * w {
        (max_w, h * max_w / w)
    } else {
        (w * max_h / h, max_h)
    };
    (out_w.max(1) as u32, out_h.max(1) as u32)
}

/// Resized copy of `image` fitting inside `max_w` x `max_h`. Upsamples when smaller.
pub fn resize_to_fit(image: &image::RgbaImage, max_w: u32, max_h: u32) -> image::RgbaImage {
    let (w, h) = fit_dimensions(image.width(), image.height(), max_w, max_h);
    if (w, h) == image.dimensions() {
        return image.clone();
    }
    image::imageops::resize(image, w, h, image::imageops::FilterType::Lanczos3)
}

/// `floor(min(width, height) * scale)`; negative or non-finite scales give 0.
pub fn auto_margin(size: CanvasSize, scale: f64) -> u32 {
    if !scale.is_finite() || scale <= 0.0 {
        return 0;
    }
    (f64::from(size.min_side()) * scale).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;

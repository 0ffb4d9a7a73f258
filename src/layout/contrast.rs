use crate::foundation::core::Rgb;

/// Backgrounds with luma strictly above this get dark text.
pub const LUMA_THRESHOLD: f64 = 160.0;

/// Black on bright backgrounds, white otherwise. Luma exactly at the threshold gets white.
pub fn pick_best_text_color(background: Rgb) -> Rgb {
    if background.luma() > LUMA_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/contrast.rs"]
mod tests;

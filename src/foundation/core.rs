use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Rect};

/// Opaque sRGB color with 8-bit channels.
///
/// Parsing never fails: anything that is not `#RRGGBB` (the `#` is optional, hex digits are
/// case-insensitive) or an exact `[r, g, b]` triple in `0..=255` becomes
/// [`Rgb::NEUTRAL_GRAY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorInput", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Fallback for malformed color input.
    pub const NEUTRAL_GRAY: Rgb = Rgb::new(128, 128, 128);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure red, the brand color used when a request carries no colors.
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strictly parse `#RRGGBB` / `RRGGBB`. Returns `None` for anything else.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Parse hex, substituting [`Rgb::NEUTRAL_GRAY`] for malformed input.
    pub fn from_hex_or_gray(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or_else(|| {
            tracing::debug!(input = s, "malformed hex color, using neutral gray");
            Self::NEUTRAL_GRAY
        })
    }

    /// Build from raw channel values. Exactly three values in `0..=255` are required.
    pub fn from_channels(channels: &[i64]) -> Self {
        match channels {
            [r, g, b] => match (u8::try_from(*r), u8::try_from(*g), u8::try_from(*b)) {
                (Ok(r), Ok(g), Ok(b)) => Self::new(r, g, b),
                _ => Self::NEUTRAL_GRAY,
            },
            _ => Self::NEUTRAL_GRAY,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual luma with broadcast (BT.601) weights, in `0.0..=255.0`.
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Color with the hue rotated half a turn in HLS space, lightness and saturation kept.
    pub fn complementary(self) -> Self {
        let (h, l, s) = rgb_to_hls(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        let (r, g, b) = hls_to_rgb((h + 0.5).rem_euclid(1.0), l, s);
        // Truncation, not rounding.
        Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }

    /// Linear interpolation towards `other`; `t` is clamped to `0..=1`.
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let af = f32::from(a);
            let bf = f32::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// `src` painted over `self` with straight alpha `alpha`.
    pub fn under(self, src: Rgb, alpha: u8) -> Self {
        self.lerp(src, f32::from(alpha) / 255.0)
    }

    /// Straight RGBA8 with full opacity.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<&str> for Rgb {
    fn from(s: &str) -> Self {
        Self::from_hex_or_gray(s)
    }
}

/// Any color-ish value accepted at the API boundary (hex string, channel array, or garbage).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// `#RRGGBB` string.
    Hex(String),
    /// `[r, g, b]` channel array.
    Channels(Vec<i64>),
    /// Anything else; normalizes to gray.
    Other(serde_json::Value),
}

impl From<ColorInput> for Rgb {
    fn from(input: ColorInput) -> Self {
        match input {
            ColorInput::Hex(s) => Rgb::from_hex_or_gray(&s),
            ColorInput::Channels(v) => Rgb::from_channels(&v),
            ColorInput::Other(_) => Rgb::NEUTRAL_GRAY,
        }
    }
}

fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;
    if rangec == 0.0 {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
        let hue = hue.rem_euclid(1.0);
        if hue < 1.0 / 6.0 {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue < 0.5 {
            m2
        } else if hue < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            m1
        }
    }

    (
        channel(m1, m2, h + 1.0 / 3.0),
        channel(m1, m2, h),
        channel(m1, m2, h - 1.0 / 3.0),
    )
}

/// Pixel dimensions of an output canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Construct a canvas size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The shorter side.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

/// The fixed set of output aspect ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    /// 1080×1080.
    Square,
    /// 1080×1350.
    Portrait,
    /// 1920×1080.
    Landscape,
}

impl SizePreset {
    /// Every preset in output order.
    pub const ALL: [SizePreset; 3] = [Self::Square, Self::Portrait, Self::Landscape];

    /// Name used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// Canvas dimensions for this preset.
    pub fn size(self) -> CanvasSize {
        match self {
            Self::Square => CanvasSize::new(1080, 1080),
            Self::Portrait => CanvasSize::new(1080, 1350),
            Self::Landscape => CanvasSize::new(1920, 1080),
        }
    }
}

impl std::str::FromStr for SizePreset {
    type Err = crate::AdforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::AdforgeError::validation(format!("unknown size preset '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

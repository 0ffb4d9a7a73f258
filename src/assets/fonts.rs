use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::builtin_font;
use crate::foundation::error::{AdforgeError, AdforgeResult};

/// Sans-serif families looked up by name, in order, before the generic family.
pub(crate) const SANS_SERIF_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "FreeSans",
];

/// Where the batch typeface was resolved from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontSource {
    /// Explicitly configured font file.
    File {
        /// Path the bytes were read from.
        path: PathBuf,
    },
    /// Sans-serif face found in the system font database.
    System {
        /// Family name reported by the font database.
        family: String,
    },
    /// The compiled-in 5x7 bitmap face.
    Builtin,
}

#[derive(Clone, Debug)]
enum Face {
    Outline {
        bytes: Arc<Vec<u8>>,
        index: u32,
        family: String,
    },
    Bitmap,
}

/// Font resolved once per batch and shared read-only by every render job.
#[derive(Clone, Debug)]
pub struct Typeface {
    face: Face,
    source: FontSource,
}

impl Typeface {
    /// The built-in bitmap face. Always available.
    pub fn builtin() -> Self {
        Self {
            face: Face::Bitmap,
            source: FontSource::Builtin,
        }
    }

    /// Validate outline font bytes by registering them with a text layout context.
    pub fn from_bytes(bytes: Vec<u8>, index: u32, source: FontSource) -> AdforgeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AdforgeError::validation("no font families registered from font bytes")
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdforgeError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            face: Face::Outline {
                bytes: Arc::new(bytes),
                index,
                family,
            },
            source,
        })
    }

    /// Read and validate a font file.
    pub fn from_file(path: &Path) -> AdforgeResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            AdforgeError::asset(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(
            bytes,
            0,
            FontSource::File {
                path: path.to_path_buf(),
            },
        )
    }

    /// First sans-serif face in the system font database, if any.
    ///
    /// fontdb maps the generic sans-serif family to "Arial" unless fontconfig says otherwise, so
    /// common installed families are tried by name before the generic one.
    pub fn system_sans_serif() -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::sans_serif_from_db(&db, SANS_SERIF_FAMILIES)
    }

    pub(crate) fn sans_serif_from_db(db: &usvg::fontdb::Database, names: &[&str]) -> Option<Self> {
        use usvg::fontdb;

        let families: Vec<fontdb::Family<'_>> = names
            .iter()
            .map(|name| fontdb::Family::Name(*name))
            .chain(std::iter::once(fontdb::Family::SansSerif))
            .collect();
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query)?;
        let family = db
            .face(id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| "sans-serif".to_string());
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

        match Self::from_bytes(bytes, index, FontSource::System { family }) {
            Ok(face) => Some(face),
            Err(e) => {
                tracing::warn!(error = %e, "system sans-serif face rejected");
                None
            }
        }
    }

    /// Resolve the batch typeface. Never fails: configured file, then system sans-serif,
    /// then the built-in face.
    pub fn resolve(font_path: Option<&Path>, system_fonts: bool) -> Self {
        let mut fell_back = false;
        if let Some(path) = font_path {
            match Self::from_file(path) {
                Ok(face) => return face,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "configured font unusable");
                    fell_back = true;
                }
            }
        }
        if system_fonts {
            if let Some(face) = Self::system_sans_serif() {
                tracing::debug!(family = face.family(), "using system font");
                return face;
            }
            tracing::warn!("no system sans-serif font found");
            fell_back = true;
        }
        if fell_back {
            tracing::warn!("falling back to built-in bitmap font");
        }
        Self::builtin()
    }

    /// Where this face came from.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Family name (`"builtin 5x7"` for the bitmap face).
    pub fn family(&self) -> &str {
        match &self.face {
            Face::Outline { family, .. } => family,
            Face::Bitmap => "builtin 5x7",
        }
    }

    /// Raw outline font bytes, `None` for the bitmap face.
    pub fn font_bytes(&self) -> Option<&[u8]> {
        match &self.face {
            Face::Outline { bytes, .. } => Some(bytes.as_slice()),
            Face::Bitmap => None,
        }
    }

    /// Whether this is the built-in bitmap face.
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Bitmap)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Brush carried through Parley layouts; color is chosen at draw time.
pub(crate) struct TextBrush;

/// A single line of text shaped at one size, ready to be measured and drawn.
pub struct ShapedText {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) size_px: f32,
    pub(crate) glyphs: ShapedGlyphs,
}

pub(crate) enum ShapedGlyphs {
    Outline {
        layout: parley::Layout<TextBrush>,
        font: vello_cpu::peniko::FontData,
    },
    Bitmap {
        text: String,
        scale: u32,
    },
}

impl ShapedText {
    /// Advance width of the line in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Line height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Nominal size the text was shaped at.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

impl std::fmt::Debug for ShapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedText")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("size_px", &self.size_px)
            .finish_non_exhaustive()
    }
}

enum Backend {
    Outline {
        font_ctx: parley::FontContext,
        layout_ctx: parley::LayoutContext<TextBrush>,
        family: String,
        font: vello_cpu::peniko::FontData,
    },
    Bitmap,
}

/// Per-worker text shaping state. Not shared between threads.
pub struct TextEngine {
    backend: Backend,
}

impl TextEngine {
    /// Build shaping contexts for `face`.
    pub fn new(face: &Typeface) -> Self {
        let backend = match &face.face {
            Face::Outline {
                bytes,
                index,
                family,
            } => {
                let mut font_ctx = parley::FontContext::default();
                font_ctx.collection.register_fonts(
                    parley::fontique::Blob::from(bytes.as_ref().clone()),
                    None,
                );
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    *index,
                );
                Backend::Outline {
                    font_ctx,
                    layout_ctx: parley::LayoutContext::new(),
                    family: family.clone(),
                    font,
                }
            }
            Face::Bitmap => Backend::Bitmap,
        };
        Self { backend }
    }

    /// Shape `text` as a single unwrapped line at `size_px`.
    pub fn shape(&mut self, text: &str, size_px: f32) -> AdforgeResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AdforgeError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        match &mut self.backend {
            Backend::Outline {
                font_ctx,
                layout_ctx,
                family,
                font,
            } => {
                let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
                builder.push_default(parley::style::StyleProperty::FontStack(
                    parley::style::FontStack::Source(Cow::Owned(family.clone())),
                ));
                builder.push_default(parley::style::StyleProperty::FontSize(size_px));
                builder.push_default(parley::style::StyleProperty::Brush(
                    TextBrush,
                ));
                let mut layout: parley::Layout<TextBrush> = builder.build(text);
                layout.break_all_lines(None);

                Ok(ShapedText {
                    width: layout.width(),
                    height: layout.height(),
                    size_px,
                    glyphs: ShapedGlyphs::Outline {
                        layout,
                        font: font.clone(),
                    },
                })
            }
            Backend::Bitmap => {
                let scale = builtin_font::scale_for_size(size_px);
                let (w, h) = builtin_font::measure(text, scale);
                Ok(ShapedText {
                    width: w as f32,
                    height: h as f32,
                    size_px,
                    glyphs: ShapedGlyphs::Bitmap {
                        text: text.to_string(),
                        scale,
                    },
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;

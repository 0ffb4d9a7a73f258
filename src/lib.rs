//! adforge composes advertising creatives from a product cutout, two lines of copy and a brand
//! color.
//!
//! A batch renders six fixed templates at three size presets and writes 18 PNG files. Every
//! creative is drawn on the CPU with `vello_cpu`, text is shaped with `parley` and shrunk until
//! it fits its box, and text color is picked against the background it actually lands on.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode the cutout once and resolve one typeface for the whole batch
//! 2. **Compose**: per `(template, size)` job, paint the backdrop, place the cutout, fit the text
//! 3. **Score**: check the finished pixels against the regions the layout expected
//! 4. **Write**: one `{size}_{template}.png` per job, overwriting older files
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs and fonts give identical files.
//! - **Premultiplied RGBA8** internally, flattened to RGB only when encoding.
//! - **Job isolation**: one failing job never stops its siblings.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod copy;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod suggest;
mod templates;
mod validate;

pub use assets::decode::{Cutout, decode_cutout, load_cutout};
pub use assets::fonts::{FontSource, ShapedText, TextEngine, Typeface};
pub use assets::palette::{FixedPalette, PaletteSource};
pub use copy::{
    CopyBrief, CopyConfig, CopyGenerator, CreativeCopy, StaticCopy, build_copy_prompt,
    generate_copy, parse_copy_response,
};
pub use foundation::core::{CanvasSize, ColorInput, Point, Rect, Rgb, SizePreset};
pub use foundation::error::{AdforgeError, AdforgeResult};
pub use layout::contrast::{LUMA_THRESHOLD, pick_best_text_color};
pub use layout::fit::{FittedText, FontSizing, auto_font_size};
pub use layout::geometry::{DEFAULT_MARGIN_SCALE, auto_margin, fit_dimensions, resize_to_fit};
pub use pipeline::ComposerOpts;
pub use pipeline::batch::{
    BatchReport, JobFailure, JobOutcome, RenderJob, SizeRecord, generate_all, plan_jobs,
};
pub use render::canvas::Canvas;
pub use suggest::{LayoutSuggestions, aspect_ratio, suggest_layout};
pub use templates::Template;
pub use templates::driver::{ComposeRequest, Composition, LayoutReport, TextPlacement};
pub use templates::recipe::{
    Backdrop, BadgePosition, BadgeStyle, CHARCOAL, CutoutAnchor, CutoutSlot, Fill, OfferSlot,
    PILL_RED, Recipe, TaglineSlot,
};
pub use validate::{
    BRIGHTNESS_RANGE, COLOR_DISTANCE_LIMIT, CONTRAST_MIN_STD, ExpectedRegion, score_file,
    score_regions,
};

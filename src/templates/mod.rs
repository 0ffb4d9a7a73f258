//! The six creative templates and the shared driver that composes them.

pub(crate) mod driver;
pub(crate) mod recipe;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::decode::load_cutout;
use crate::assets::fonts::{TextEngine, Typeface};
use crate::foundation::core::{CanvasSize, Rgb, SizePreset};
use crate::foundation::error::{AdforgeError, AdforgeResult};
use crate::layout::fit::FontSizing;

use driver::{ComposeRequest, Composition, LayoutReport};
use recipe::Recipe;

/// One of the fixed creative layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Template {
    /// Brand fill, centered cutout, offer on a red pill.
    #[serde(rename = "clean")]
    CleanMinimal,
    /// White canvas with a brand side panel holding the copy.
    #[serde(rename = "split")]
    SplitLayout,
    /// Cutout on the left, tagline and a round brand badge to its right.
    #[serde(rename = "hero")]
    HeroBadge,
    /// Brand-to-charcoal gradient with the offer over a soft halo.
    #[serde(rename = "gradient")]
    GradientGlow,
    /// Charcoal canvas with a glowing brand ring around the offer.
    #[serde(rename = "neon")]
    NeonBadge,
    /// Brand band cut diagonally across a white canvas.
    #[serde(rename = "diagonal")]
    DiagonalSplit,
}

impl Template {
    /// Every template in output order.
    pub const ALL: [Template; 6] = [
        Self::CleanMinimal,
        Self::SplitLayout,
        Self::HeroBadge,
        Self::GradientGlow,
        Self::NeonBadge,
        Self::DiagonalSplit,
    ];

    /// Short tag used in file names and batch records.
    pub fn tag(self) -> &'static str {
        match self {
            Self::CleanMinimal => "clean",
            Self::SplitLayout => "split",
            Self::HeroBadge => "hero",
            Self::GradientGlow => "gradient",
            Self::NeonBadge => "neon",
            Self::DiagonalSplit => "diagonal",
        }
    }

    /// Layout recipe.
    pub fn recipe(self) -> Recipe {
        match self {
            Self::CleanMinimal => recipe::CLEAN_MINIMAL,
            Self::SplitLayout => recipe::SPLIT_LAYOUT,
            Self::HeroBadge => recipe::HERO_BADGE,
            Self::GradientGlow => recipe::GRADIENT_GLOW,
            Self::NeonBadge => recipe::NEON_BADGE,
            Self::DiagonalSplit => recipe::DIAGONAL_SPLIT,
        }
    }

    /// `{preset}_{tag}.png`.
    pub fn file_name(self, preset: SizePreset) -> String {
        format!("{}_{}.png", preset.name(), self.tag())
    }

    /// Compose in memory without touching the filesystem.
    pub fn compose(
        self,
        engine: &mut TextEngine,
        request: &ComposeRequest<'_>,
    ) -> AdforgeResult<Composition> {
        driver::compose(self, self.recipe(), engine, request)
    }

    /// Compose and write a PNG to `output_path`, overwriting it.
    pub fn render_with(
        self,
        engine: &mut TextEngine,
        request: &ComposeRequest<'_>,
        output_path: &Path,
    ) -> AdforgeResult<LayoutReport> {
        let Composition { canvas, report } = self.compose(engine, request)?;
        canvas.save_png(output_path)?;
        Ok(report)
    }

    /// Standalone render: load the cutout, resolve a font, compose, write one PNG.
    #[tracing::instrument(skip(self, tagline, offer), fields(template = self.tag()))]
    pub fn render(
        self,
        cutout_path: &Path,
        output_path: &Path,
        tagline: &str,
        offer: &str,
        brand: Rgb,
        size: CanvasSize,
    ) -> AdforgeResult<LayoutReport> {
        let cutout = load_cutout(cutout_path)?;
        let mut engine = TextEngine::new(&Typeface::resolve(None, true));
        let request = ComposeRequest {
            cutout: &cutout,
            tagline,
            offer,
            brand,
            size,
            sizing: FontSizing::default(),
        };
        self.render_with(&mut engine, &request, output_path)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Template {
    type Err = AdforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| AdforgeError::validation(format!("unknown template '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/mod.rs"]
mod tests;

//! Declarative description of each template: what goes where, in proportions of the canvas.

use crate::foundation::core::Rgb;

/// Red used for the Clean Minimal offer pill.
pub const PILL_RED: Rgb = Rgb::new(255, 60, 60);
/// Near-black used by the dark templates.
pub const CHARCOAL: Rgb = Rgb::new(20, 20, 20);

/// A color that is either fixed or taken from the batch brand color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// The batch brand color.
    Brand,
    /// A fixed color.
    Fixed(Rgb),
}

impl Fill {
    /// Concrete color for `brand`.
    pub fn resolve(self, brand: Rgb) -> Rgb {
        match self {
            Fill::Brand => brand,
            Fill::Fixed(c) => c,
        }
    }
}

/// First layer painted onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    /// Flat fill.
    Solid(Fill),
    /// `base` fill with a full-height brand panel covering the right `fraction` of the width.
    SidePanel {
        /// Color left of the panel.
        base: Rgb,
        /// Panel width as a fraction of canvas width.
        fraction: f64,
    },
    /// Brand color at the top fading linearly to `bottom`.
    VerticalGradient {
        /// Color of the last row.
        bottom: Rgb,
    },
    /// `base` fill with a brand quad spanning the top edge, its lower edge running from
    /// `left` to `right` (fractions of canvas height).
    DiagonalBand {
        /// Color below the band.
        base: Rgb,
        /// Band depth at the left edge.
        left: f64,
        /// Band depth at the right edge.
        right: f64,
    },
}

/// Anchor for the resized cutout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CutoutAnchor {
    /// Horizontally centered, top edge `drop` px below the margin.
    TopCenter {
        /// Offset below the margin.
        drop: u32,
    },
    /// Left edge at the margin, vertically centered.
    MiddleLeft,
    /// Left edge at the margin, bottom edge one margin above the canvas bottom.
    BottomLeft,
}

/// Fit bounds and anchor of the cutout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutoutSlot {
    /// Maximum width as a fraction of canvas width.
    pub max_width: f64,
    /// Maximum height as a fraction of canvas height.
    pub max_height: f64,
    /// Placement.
    pub anchor: CutoutAnchor,
}

/// Where the tagline goes and how much room it gets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TaglineSlot {
    /// Centered across the canvas at the top margin; box spans the width inside the margins.
    CenteredTop {
        /// Fit box height.
        box_height: f64,
    },
    /// Left-aligned inside the side panel, one and a half margins from the top.
    Panel {
        /// Fit box height.
        box_height: f64,
    },
    /// Left-aligned one margin right of the cutout, at the top margin.
    BesideCutout {
        /// Fit box width as a fraction of canvas width, clamped to the room left on the canvas.
        width_fraction: f64,
        /// Fit box height.
        box_height: f64,
    },
    /// Left-aligned on the diagonal band, two margins in.
    Band {
        /// Fit box height.
        box_height: f64,
    },
}

/// Look of a circular offer badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeStyle {
    /// Solid brand disc.
    Filled,
    /// Brand ring over a blurred brand glow.
    NeonRing {
        /// Ring stroke width.
        stroke: f64,
        /// Glow opacity (0..=255).
        glow_alpha: u8,
        /// Glow blur radius.
        blur: u32,
    },
}

/// Where a circular badge sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgePosition {
    /// Below the tagline in the column right of the cutout, `drop` px under the top margin.
    BesideCutout {
        /// Offset below the top margin.
        drop: f64,
    },
    /// Bottom-right corner: one margin from the right, two from the bottom.
    BottomRight,
}

/// Offer treatment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OfferSlot {
    /// Text on a rounded pill, centered one margin above the bottom.
    Pill {
        /// Pill color.
        fill: Rgb,
        /// Corner radius.
        radius: f64,
        /// Space between text and pill edge.
        padding: f64,
        /// Fit box height.
        box_height: f64,
    },
    /// Left-aligned under the tagline in the same column.
    Stacked {
        /// Fit box height.
        box_height: f64,
    },
    /// Text centered in a circular badge, fit into a square of 0.8 diameter.
    Badge {
        /// Diameter as a fraction of the shorter canvas side.
        diameter: f64,
        /// Look.
        style: BadgeStyle,
        /// Placement.
        position: BadgePosition,
    },
    /// Text centered over a soft white halo whose box bottom sits two margins above the bottom.
    Halo {
        /// Halo opacity (0..=255).
        alpha: u8,
        /// How far the halo extends past the text box.
        spread: f64,
        /// Space between text and the halo box.
        inset: f64,
        /// Halo blur radius.
        blur: u32,
        /// Fit box height.
        box_height: f64,
    },
}

/// Complete layout recipe for one template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recipe {
    /// Background layer.
    pub backdrop: Backdrop,
    /// Cutout placement.
    pub cutout: CutoutSlot,
    /// Tagline placement.
    pub tagline: TaglineSlot,
    /// Offer placement.
    pub offer: OfferSlot,
}

pub(crate) const CLEAN_MINIMAL: Recipe = Recipe {
    backdrop: Backdrop::Solid(Fill::Brand),
    cutout: CutoutSlot {
        max_width: 0.70,
        max_height: 0.55,
        anchor: CutoutAnchor::TopCenter { drop: 80 },
    },
    tagline: TaglineSlot::CenteredTop { box_height: 160.0 },
    offer: OfferSlot::Pill {
        fill: PILL_RED,
        radius: 40.0,
        padding: 25.0,
        box_height: 200.0,
    },
};

pub(crate) const SPLIT_LAYOUT: Recipe = Recipe {
    backdrop: Backdrop::SidePanel {
        base: Rgb::WHITE,
        fraction: 0.40,
    },
    cutout: CutoutSlot {
        max_width: 0.55,
        max_height: 0.75,
        anchor: CutoutAnchor::MiddleLeft,
    },
    tagline: TaglineSlot::Panel { box_height: 200.0 },
    offer: OfferSlot::Stacked { box_height: 200.0 },
};

pub(crate) const HERO_BADGE: Recipe = Recipe {
    backdrop: Backdrop::Solid(Fill::Fixed(Rgb::WHITE)),
    cutout: CutoutSlot {
        max_width: 0.58,
        max_height: 0.75,
        anchor: CutoutAnchor::MiddleLeft,
    },
    tagline: TaglineSlot::BesideCutout {
        width_fraction: 0.32,
        box_height: 200.0,
    },
    offer: OfferSlot::Badge {
        diameter: 0.22,
        style: BadgeStyle::Filled,
        position: BadgePosition::BesideCutout { drop: 260.0 },
    },
};

pub(crate) const GRADIENT_GLOW: Recipe = Recipe {
    backdrop: Backdrop::VerticalGradient { bottom: CHARCOAL },
    cutout: CutoutSlot {
        max_width: 0.70,
        max_height: 0.65,
        anchor: CutoutAnchor::TopCenter { drop: 100 },
    },
    tagline: TaglineSlot::CenteredTop { box_height: 170.0 },
    offer: OfferSlot::Halo {
        alpha: 80,
        spread: 20.0,
        inset: 15.0,
        blur: 25,
        box_height: 200.0,
    },
};

pub(crate) const NEON_BADGE: Recipe = Recipe {
    backdrop: Backdrop::Solid(Fill::Fixed(CHARCOAL)),
    cutout: CutoutSlot {
        max_width: 0.70,
        max_height: 0.70,
        anchor: CutoutAnchor::TopCenter { drop: 120 },
    },
    tagline: TaglineSlot::CenteredTop { box_height: 160.0 },
    offer: OfferSlot::Badge {
        diameter: 0.28,
        style: BadgeStyle::NeonRing {
            stroke: 8.0,
            glow_alpha: 60,
            blur: 25,
        },
        position: BadgePosition::BottomRight,
    },
};

pub(crate) const DIAGONAL_SPLIT: Recipe = Recipe {
    backdrop: Backdrop::DiagonalBand {
        base: Rgb::WHITE,
        left: 0.30,
        right: 0.55,
    },
    cutout: CutoutSlot {
        max_width: 0.55,
        max_height: 0.70,
        anchor: CutoutAnchor::BottomLeft,
    },
    tagline: TaglineSlot::Band { box_height: 200.0 },
    offer: OfferSlot::Stacked { box_height: 160.0 },
};

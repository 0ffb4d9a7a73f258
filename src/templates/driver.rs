use serde::Serialize;

use crate::assets::decode::Cutout;
use crate::assets::fonts::{ShapedText, TextEngine};
use crate::foundation::core::{CanvasSize, Point, Rect, Rgb};
use crate::foundation::error::AdforgeResult;
use crate::layout::contrast::pick_best_text_color;
use crate::layout::fit::{FittedText, FontSizing, auto_font_size};
use crate::layout::geometry::{DEFAULT_MARGIN_SCALE, auto_margin, resize_to_fit};
use crate::render::canvas::{Canvas, gradient_row_color};
use crate::render::shapes;
use crate::render::text::{draw_centered_text, fill_text};
use crate::templates::Template;
use crate::templates::recipe::{
    Backdrop, BadgePosition, BadgeStyle, CutoutAnchor, OfferSlot, Recipe, TaglineSlot,
};
use crate::validate::ExpectedRegion;

/// Inputs for composing one creative.
#[derive(Clone, Copy, Debug)]
pub struct ComposeRequest<'a> {
    /// Decoded product cutout.
    pub cutout: &'a Cutout,
    /// Headline text.
    pub tagline: &'a str,
    /// Offer text.
    pub offer: &'a str,
    /// Brand color theming the creative.
    pub brand: Rgb,
    /// Output canvas size.
    pub size: CanvasSize,
    /// Font-size search parameters.
    pub sizing: FontSizing,
}

/// Where a text line ended up and how it was styled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextPlacement {
    /// Line box as drawn.
    pub bounds: Rect,
    /// Chosen font size.
    pub size: u32,
    /// `true` when the text exceeds its box even at the minimum size.
    pub overflowed: bool,
    /// Text color.
    pub color: Rgb,
    /// Local background the color was picked against.
    pub background: Rgb,
}

/// Placement decisions for one composed creative.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Template that produced the creative.
    pub template: Template,
    /// Canvas size.
    pub size: CanvasSize,
    /// Margin derived from the canvas size.
    pub margin: u32,
    /// Bounds of the composited cutout (may extend past the canvas for odd fits).
    pub cutout: Rect,
    /// Tagline placement.
    pub tagline: TextPlacement,
    /// Offer placement.
    pub offer: TextPlacement,
}

impl LayoutReport {
    /// Whether any text overflowed its box.
    pub fn overflowed(&self) -> bool {
        self.tagline.overflowed || self.offer.overflowed
    }

    /// Regions a finished creative should satisfy: each text line over its local background.
    pub fn expected_regions(&self) -> Vec<ExpectedRegion> {
        [&self.tagline, &self.offer]
            .into_iter()
            .map(|t| ExpectedRegion {
                bbox: [
                    t.bounds.x0.floor() as i64,
                    t.bounds.y0.floor() as i64,
                    t.bounds.width().ceil() as i64,
                    t.bounds.height().ceil() as i64,
                ],
                color: t.background,
            })
            .collect()
    }
}

/// A composed, not yet encoded, creative.
pub struct Composition {
    /// Finished pixels.
    pub canvas: Canvas,
    /// Placement decisions.
    pub report: LayoutReport,
}

/// Resolved backdrop geometry, used both to paint and to answer "what color is behind this point".
struct Scene {
    backdrop: Backdrop,
    brand: Rgb,
    w: f64,
    h: f64,
}

impl Scene {
    fn base(&self) -> Rgb {
        match self.backdrop {
            Backdrop::Solid(fill) => fill.resolve(self.brand),
            Backdrop::SidePanel { base, .. } | Backdrop::DiagonalBand { base, .. } => base,
            Backdrop::VerticalGradient { .. } => self.brand,
        }
    }

    /// `(x, width)` of the side panel.
    fn panel(&self) -> Option<(f64, f64)> {
        match self.backdrop {
            Backdrop::SidePanel { fraction, .. } => {
                let pw = (self.w * fraction).floor();
                Some((self.w - pw, pw))
            }
            _ => None,
        }
    }

    fn band_points(&self) -> Option<[Point; 4]> {
        match self.backdrop {
            Backdrop::DiagonalBand { left, right, .. } => Some([
                Point::new(0.0, 0.0),
                Point::new(self.w, 0.0),
                Point::new(self.w, (self.h * right).floor()),
                Point::new(0.0, (self.h * left).floor()),
            ]),
            _ => None,
        }
    }

    fn paint(&self, size: CanvasSize) -> AdforgeResult<Canvas> {
        let mut canvas = Canvas::new(size, self.base())?;
        match self.backdrop {
            Backdrop::Solid(_) => {}
            Backdrop::VerticalGradient { bottom } => {
                canvas.fill_vertical_gradient(self.brand, bottom);
            }
            Backdrop::SidePanel { .. } => {
                if let Some((x, pw)) = self.panel() {
                    let rect = Rect::new(x, 0.0, x + pw, self.h);
                    canvas.draw(|ctx| {
                        ctx.set_paint(shapes::paint(self.brand));
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            rect.x0, rect.y0, rect.x1, rect.y1,
                        ));
                    })?;
                }
            }
            Backdrop::DiagonalBand { .. } => {
                if let Some(points) = self.band_points() {
                    canvas.draw(|ctx| shapes::fill_polygon(ctx, &points, self.brand))?;
                }
            }
        }
        Ok(canvas)
    }

    /// Backdrop color under `p`, ignoring the cutout and decorations.
    fn color_at(&self, p: Point) -> Rgb {
        match self.backdrop {
            Backdrop::Solid(fill) => fill.resolve(self.brand),
            Backdrop::SidePanel { base, .. } => match self.panel() {
                Some((x, _)) if p.x >= x => self.brand,
                _ => base,
            },
            Backdrop::VerticalGradient { bottom } => {
                let y = p.y.clamp(0.0, self.h - 1.0) as u32;
                gradient_row_color(self.brand, bottom, y, self.h as u32)
            }
            Backdrop::DiagonalBand { base, .. } => match self.band_points() {
                Some([_, _, right, left]) => {
                    let edge = left.y + (right.y - left.y) * (p.x / self.w).clamp(0.0, 1.0);
                    if p.y < edge { self.brand } else { base }
                }
                None => base,
            },
        }
    }
}

struct PlacedText {
    fitted: FittedText,
    origin: Point,
    centered: bool,
    background: Rgb,
}

impl PlacedText {
    fn bounds(&self) -> Rect {
        let s = &self.fitted.shaped;
        Rect::from_origin_size(self.origin, (f64::from(s.width()), f64::from(s.height())))
    }

    fn placement(&self) -> TextPlacement {
        TextPlacement {
            bounds: self.bounds(),
            size: self.fitted.size,
            overflowed: self.fitted.overflowed,
            color: pick_best_text_color(self.background),
            background: self.background,
        }
    }
}

fn line_size(shaped: &ShapedText) -> (f64, f64) {
    (f64::from(shaped.width()), f64::from(shaped.height()))
}

/// Compose `template` for `req`: backdrop, cutout, decorations, then text.
#[tracing::instrument(skip_all, fields(template = template.tag(), width = req.size.width, height = req.size.height))]
pub(crate) fn compose(
    template: Template,
    recipe: Recipe,
    engine: &mut TextEngine,
    req: &ComposeRequest<'_>,
) -> AdforgeResult<Composition> {
    let size = req.size;
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let margin = auto_margin(size, DEFAULT_MARGIN_SCALE);
    let pad = f64::from(margin);
    let scene = Scene {
        backdrop: recipe.backdrop,
        brand: req.brand,
        w,
        h,
    };

    let mut canvas = scene.paint(size)?;

    let slot = recipe.cutout;
    let product = resize_to_fit(
        req.cutout.image(),
        (w * slot.max_width).floor() as u32,
        (h * slot.max_height).floor() as u32,
    );
    let (cw, ch) = (f64::from(product.width()), f64::from(product.height()));
    let (cx, cy) = match slot.anchor {
        CutoutAnchor::TopCenter { drop } => (((w - cw) / 2.0).floor(), pad + f64::from(drop)),
        CutoutAnchor::MiddleLeft => (pad, ((h - ch) / 2.0).floor()),
        CutoutAnchor::BottomLeft => (pad, h - ch - pad),
    };
    canvas.composite_image(&product, cx as i64, cy as i64)?;
    let cutout = Rect::new(cx, cy, cx + cw, cy + ch);
    tracing::debug!(x = cx, y = cy, w = cw, h = ch, "placed cutout");

    let (tag_x, tag_y, tag_w, tag_h, centered) = match recipe.tagline {
        TaglineSlot::CenteredTop { box_height } => (pad, pad, w - 2.0 * pad, box_height, true),
        TaglineSlot::Panel { box_height } => {
            let (px, pw) = scene.panel().unwrap_or((0.0, w));
            (px + pad, (1.5 * pad).floor(), pw - 2.0 * pad, box_height, false)
        }
        TaglineSlot::BesideCutout {
            width_fraction,
            box_height,
        } => {
            let x = cutout.x1 + pad;
            let bw = (w * width_fraction).floor().min(w - x - pad);
            (x, pad, bw, box_height, false)
        }
        TaglineSlot::Band { box_height } => {
            (2.0 * pad, (1.6 * pad).floor(), w - 3.0 * pad, box_height, false)
        }
    };
    let tag_w = tag_w.max(1.0);
    let fitted = auto_font_size(engine, req.tagline, tag_w as f32, tag_h as f32, req.sizing)?;
    let (tw, th) = line_size(&fitted.shaped);
    let origin = if centered {
        Point::new(((w - tw) / 2.0).max(0.0), tag_y)
    } else {
        Point::new(tag_x, tag_y)
    };
    let background = scene.color_at(Point::new(origin.x + tw / 2.0, origin.y + th / 2.0));
    let tagline = PlacedText {
        fitted,
        origin,
        centered,
        background,
    };

    let offer = match recipe.offer {
        OfferSlot::Pill {
            fill,
            radius,
            padding,
            box_height,
        } => {
            let fitted = auto_font_size(
                engine,
                req.offer,
                (w - 2.0 * pad).max(1.0) as f32,
                box_height as f32,
                req.sizing,
            )?;
            let (ow, oh) = line_size(&fitted.shaped);
            let (pw, ph) = (ow + 2.0 * padding, oh + 2.0 * padding);
            let px = ((w - pw) / 2.0).floor();
            let py = h - ph - pad;
            canvas.draw(|ctx| shapes::pill(ctx, Rect::new(px, py, px + pw, py + ph), radius, fill))?;
            PlacedText {
                fitted,
                origin: Point::new(px + padding, py + padding),
                centered: false,
                background: fill,
            }
        }
        OfferSlot::Stacked { box_height } => {
            let fitted =
                auto_font_size(engine, req.offer, tag_w as f32, box_height as f32, req.sizing)?;
            let (ow, oh) = line_size(&fitted.shaped);
            let origin = Point::new(tag_x, (tagline.bounds().y1 + pad / 2.0).floor());
            let background =
                scene.color_at(Point::new(origin.x + ow / 2.0, origin.y + oh / 2.0));
            PlacedText {
                fitted,
                origin,
                centered: false,
                background,
            }
        }
        OfferSlot::Badge {
            diameter,
            style,
            position,
        } => {
            let d = (f64::from(size.min_side()) * diameter).floor();
            let (bx, by) = match position {
                BadgePosition::BesideCutout { drop } => (tag_x.min(w - d - pad), pad + drop),
                BadgePosition::BottomRight => (w - d - pad, h - d - 2.0 * pad),
            };
            let badge = Rect::new(bx, by, bx + d, by + d);
            let center = badge.center();
            let background = match style {
                BadgeStyle::Filled => {
                    canvas.draw(|ctx| shapes::fill_circle(ctx, center, d / 2.0, req.brand))?;
                    req.brand
                }
                BadgeStyle::NeonRing {
                    stroke,
                    glow_alpha,
                    blur,
                } => {
                    canvas.draw_blurred(badge, blur, f32::from(glow_alpha) / 255.0, |ctx| {
                        shapes::fill_ellipse(ctx, badge, req.brand)
                    })?;
                    canvas.draw(|ctx| {
                        shapes::stroke_circle(ctx, center, (d - stroke) / 2.0, stroke, req.brand)
                    })?;
                    scene.color_at(center).under(req.brand, glow_alpha)
                }
            };
            let inner = (d * 0.8).max(1.0) as f32;
            let fitted = auto_font_size(engine, req.offer, inner, inner, req.sizing)?;
            let (ow, oh) = line_size(&fitted.shaped);
            PlacedText {
                fitted,
                origin: Point::new(center.x - ow / 2.0, center.y - oh / 2.0),
                centered: false,
                background,
            }
        }
        OfferSlot::Halo {
            alpha,
            spread,
            inset,
            blur,
            box_height,
        } => {
            let fitted = auto_font_size(
                engine,
                req.offer,
                (w - 2.0 * pad).max(1.0) as f32,
                box_height as f32,
                req.sizing,
            )?;
            let (ow, oh) = line_size(&fitted.shaped);
            let (hw, hh) = (ow + 2.0 * inset, oh + 2.0 * inset);
            let hx = ((w - hw) / 2.0).floor();
            let hy = h - hh - 2.0 * pad;
            let halo = Rect::new(hx - spread, hy - spread, hx + hw + spread, hy + hh + spread);
            canvas.draw_blurred(halo, blur, f32::from(alpha) / 255.0, |ctx| {
                shapes::fill_ellipse(ctx, halo, Rgb::WHITE)
            })?;
            let origin = Point::new(hx + inset, hy + inset);
            let background = scene
                .color_at(Point::new(origin.x + ow / 2.0, origin.y + oh / 2.0))
                .under(Rgb::WHITE, alpha);
            PlacedText {
                fitted,
                origin,
                centered: false,
                background,
            }
        }
    };

    for (field, text) in [("tagline", &tagline), ("offer", &offer)] {
        if text.fitted.overflowed {
            tracing::warn!(
                template = template.tag(),
                field,
                size = text.fitted.size,
                "text overflows its box at minimum font size"
            );
        }
    }

    canvas.draw(|ctx| {
        for text in [&tagline, &offer] {
            let color = pick_best_text_color(text.background);
            if text.centered {
                draw_centered_text(ctx, &text.fitted.shaped, w, text.origin.y, color);
            } else {
                fill_text(ctx, &text.fitted.shaped, text.origin, color);
            }
        }
    })?;

    let report = LayoutReport {
        template,
        size,
        margin,
        cutout,
        tagline: tagline.placement(),
        offer: offer.placement(),
    };
    Ok(Composition { canvas, report })
}

#[cfg(test)]
#[path = "../../tests/unit/templates/driver.rs"]
mod tests;

use kurbo::Shape as _;

use crate::foundation::core::{Point, Rect, Rgb};

const TOLERANCE: f64 = 0.1;

pub(crate) fn paint(color: Rgb) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Rounded-rectangle badge.
pub(crate) fn pill(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64, fill: Rgb) {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let path = kurbo::RoundedRect::from_rect(rect, radius).to_path(TOLERANCE);
    ctx.set_paint(paint(fill));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

pub(crate) fn fill_circle(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, fill: Rgb) {
    let path = kurbo::Circle::new(center, radius).to_path(TOLERANCE);
    ctx.set_paint(paint(fill));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

pub(crate) fn fill_ellipse(ctx: &mut vello_cpu::RenderContext, bounds: Rect, fill: Rgb) {
    let path = kurbo::Ellipse::from_rect(bounds).to_path(TOLERANCE);
    ctx.set_paint(paint(fill));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

pub(crate) fn stroke_circle(
    ctx: &mut vello_cpu::RenderContext,
    center: Point,
    radius: f64,
    width: f64,
    color: Rgb,
) {
    let path = kurbo::Circle::new(center, radius).to_path(TOLERANCE);
    ctx.set_paint(paint(color));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
    ctx.stroke_path(&bezpath_to_cpu(&path));
}

/// Closed polygon through `points`; fewer than three points draws nothing.
pub(crate) fn fill_polygon(ctx: &mut vello_cpu::RenderContext, points: &[Point], fill: Rgb) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.len() < 2 {
        return;
    }
    let mut path = kurbo::BezPath::new();
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    ctx.set_paint(paint(fill));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;

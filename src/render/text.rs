use crate::assets::fonts::{ShapedGlyphs, ShapedText};
use crate::foundation::core::{Point, Rgb};
use crate::render::shapes::paint;

/// Draw `shaped` with the top-left of its line box at `origin`.
pub(crate) fn fill_text(
    ctx: &mut vello_cpu::RenderContext,
    shaped: &ShapedText,
    origin: Point,
    color: Rgb,
) {
    ctx.set_paint(paint(color));
    match &shaped.glyphs {
        ShapedGlyphs::Outline { layout, font } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        }
        ShapedGlyphs::Bitmap { text, scale } => {
            let s = f64::from(*scale);
            for (col, row) in crate::assets::builtin_font::lit_cells(text) {
                let x = origin.x + f64::from(col) * s;
                let y = origin.y + f64::from(row) * s;
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x, y, x + s, y + s));
            }
        }
    }
}

/// Draw `shaped` horizontally centered on a canvas `canvas_width` wide, top edge at `y`.
pub(crate) fn draw_centered_text(
    ctx: &mut vello_cpu::RenderContext,
    shaped: &ShapedText,
    canvas_width: f64,
    y: f64,
    color: Rgb,
) {
    let x = ((canvas_width - f64::from(shaped.width())) / 2.0).max(0.0);
    fill_text(ctx, shaped, Point::new(x, y), color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{CanvasSize, Rect, Rgb};
use crate::foundation::error::{AdforgeError, AdforgeResult};
use crate::foundation::math::{flatten_premul_over, premultiply_rgba8_in_place};
use crate::render::blur::blur_rgba8_premul;
use crate::render::composite::{over_at, premul_over_in_place};

/// Premultiplied RGBA8 raster the templates paint onto, layer by layer.
///
/// Vector layers are rasterized with `vello_cpu` into a scratch pixmap and composited
/// source-over, so every layer accumulates on top of what is already there.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl Canvas {
    /// Canvas of `size` filled with opaque `fill`.
    pub fn new(size: CanvasSize, fill: Rgb) -> AdforgeResult<Self> {
        let (w, h) = (size.width, size.height);
        if w == 0 || h == 0 || w > u32::from(u16::MAX) || h > u32::from(u16::MAX) {
            return Err(AdforgeError::validation(format!(
                "canvas size {w}x{h} must be within 1..=65535 per side"
            )));
        }
        let pixels = fill.to_rgba8().repeat((w as usize) * (h as usize));
        Ok(Self {
            width: w,
            height: h,
            pixels,
            ctx: None,
        })
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// Premultiplied pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Replace the whole canvas with a top-to-bottom linear gradient.
    pub fn fill_vertical_gradient(&mut self, top: Rgb, bottom: Rgb) {
        let row_len = self.width as usize * 4;
        let height = self.height;
        for (y, row) in self.pixels.chunks_exact_mut(row_len).enumerate() {
            let px = gradient_row_color(top, bottom, y as u32, height).to_rgba8();
            for dst in row.chunks_exact_mut(4) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Rasterize one vector layer in canvas coordinates and composite it.
    pub fn draw(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext)) -> AdforgeResult<()> {
        let (w, h) = (self.width as u16, self.height as u16);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        f(&mut ctx);

        let mut tmp = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut tmp);
        self.ctx = Some(ctx);
        premul_over_in_place(&mut self.pixels, tmp.data_as_u8_slice())
    }

    /// Rasterize a layer clipped to `bounds`, gaussian-blur it and composite it at `opacity`.
    ///
    /// The scratch area is padded by twice `blur_radius` so the blur falls off before its edge.
    pub fn draw_blurred(
        &mut self,
        bounds: Rect,
        blur_radius: u32,
        opacity: f32,
        f: impl FnOnce(&mut vello_cpu::RenderContext),
    ) -> AdforgeResult<()> {
        let pad = f64::from(blur_radius * 2);
        let ox = (bounds.x0 - pad).floor();
        let oy = (bounds.y0 - pad).floor();
        let lw = ((bounds.width() + 2.0 * pad).ceil() as u32).clamp(1, u32::from(u16::MAX));
        let lh = ((bounds.height() + 2.0 * pad).ceil() as u32).clamp(1, u32::from(u16::MAX));

        let mut ctx = vello_cpu::RenderContext::new(lw as u16, lh as u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((-ox, -oy)));
        f(&mut ctx);
        let mut layer = vello_cpu::Pixmap::new(lw as u16, lh as u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);

        let sigma = (blur_radius as f32 / 2.5).max(0.5);
        let blurred = blur_rgba8_premul(layer.data_as_u8_slice(), lw, lh, blur_radius, sigma)?;
        over_at(
            &mut self.pixels,
            self.width,
            self.height,
            &blurred,
            lw,
            lh,
            ox as i64,
            oy as i64,
            opacity,
        )
    }

    /// Composite a straight-alpha image with its top-left at `(x, y)`, clipped to the canvas.
    pub fn composite_image(&mut self, image: &image::RgbaImage, x: i64, y: i64) -> AdforgeResult<()> {
        let mut premul = image.as_raw().clone();
        premultiply_rgba8_in_place(&mut premul);
        over_at(
            &mut self.pixels,
            self.width,
            self.height,
            &premul,
            image.width(),
            image.height(),
            x,
            y,
            1.0,
        )
    }

    /// Opaque RGB copy; any remaining transparency is flattened over white.
    pub fn to_rgb_image(&self) -> AdforgeResult<image::RgbImage> {
        let rgb = flatten_premul_over(&self.pixels, [255, 255, 255]);
        image::RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| AdforgeError::render("flattened buffer does not match canvas size"))
    }

    /// Flatten and write as PNG, overwriting any existing file.
    pub fn save_png(&self, path: &Path) -> AdforgeResult<()> {
        save_rgb_png(&self.to_rgb_image()?, path)
    }
}

/// Write an opaque RGB image as PNG, overwriting any existing file.
pub(crate) fn save_rgb_png(rgb: &image::RgbImage, path: &Path) -> AdforgeResult<()> {
    image::save_buffer_with_format(
        path,
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Color of row `y` in a `height`-row vertical gradient from `top` to `bottom`.
pub(crate) fn gradient_row_color(top: Rgb, bottom: Rgb, y: u32, height: u32) -> Rgb {
    let denom = height.saturating_sub(1).max(1) as f32;
    top.lerp(bottom, y.min(height) as f32 / denom)
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

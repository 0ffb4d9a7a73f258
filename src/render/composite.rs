use crate::foundation::error::{AdforgeError, AdforgeResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel.
pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over with an extra opacity multiplier on `src`.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
    if op == 0 || src[3] == 0 {
        return dst;
    }
    let sa = mul_div255_u8(u16::from(src[3]), op);
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for c in 0..3 {
        let sc = mul_div255_u8(u16::from(src[c]), op);
        out[c] = sc.saturating_add(mul_div255_u8(u16::from(dst[c]), inv));
    }
    out
}

/// Composite two same-sized premultiplied buffers in place.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> AdforgeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AdforgeError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a `src_w` x `src_h` premultiplied buffer onto `dst` with its top-left at `(x, y)`.
///
/// Parts falling outside `dst` are clipped.
#[allow(clippy::too_many_arguments)]
pub(crate) fn over_at(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    x: i64,
    y: i64,
    opacity: f32,
) -> AdforgeResult<()> {
    if dst.len() != (dst_w as usize) * (dst_h as usize) * 4
        || src.len() != (src_w as usize) * (src_h as usize) * 4
    {
        return Err(AdforgeError::render("over_at buffer sizes do not match dimensions"));
    }

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src_w)).min(i64::from(dst_w));
    let y1 = (y + i64::from(src_h)).min(i64::from(dst_h));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        for dx in x0..x1 {
            let sx = (dx - x) as usize;
            let si = (sy * src_w as usize + sx) * 4;
            let di = (dy as usize * dst_w as usize + dx as usize) * 4;
            let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
            if s[3] == 0 {
                continue;
            }
            let d = [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]];
            dst[di..di + 4].copy_from_slice(&over(d, s, opacity));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

/// Premultiplied RGBA8 flattened over an opaque straight-alpha `matte`, returning RGB8.
pub(crate) fn flatten_premul_over(rgba_premul: &[u8], matte: [u8; 3]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba_premul.len() / 4 * 3);
    for px in rgba_premul.chunks_exact(4) {
        let inv = 255u16 - u16::from(px[3]);
        for c in 0..3 {
            let v = u16::from(px[c]) + mul_div255_u16(u16::from(matte[c]), inv);
            out.push(v.min(255) as u8);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

use crate::foundation::error::{LogoError, LogoResult};
use crate::foundation::math::mul_div255;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over of an equally sized premultiplied buffer onto `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> LogoResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(LogoError::surface(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a uniform premultiplied color over every pixel of `dst`.
pub fn tint_in_place(dst: &mut [u8], color: PremulRgba8) {
    if color[3] == 0 {
        return;
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], color);
        d.copy_from_slice(&out);
    }
}

/// Overwrite every pixel of `dst` with `color`.
pub fn fill(dst: &mut [u8], color: PremulRgba8) {
    for d in dst.chunks_exact_mut(4) {
        d.copy_from_slice(&color);
    }
}

/// Undo premultiplication of a whole buffer.
pub fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            let v = (u32::from(*c) * 255 + u32::from(a) / 2) / u32::from(a);
            *c = v.min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use crate::foundation::{
    error::{AuroraError, AuroraResult},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Source-over with a float premultiplied source (channels in `0..=255`).
/// Keeps sub-LSB gradient alphas from collapsing before they are blended.
pub fn over_f32(dst: PremulRgba8, src: [f32; 4]) -> PremulRgba8 {
    let sa = (src[3] / 255.0).clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let inv = 1.0 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        let v = src[i] + f32::from(dst[i]) * inv;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> AuroraResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AuroraError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composites premultiplied (or straight) RGBA8 over an opaque background.
pub fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg_rgba: [u8; 4],
) -> AuroraResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AuroraError::validation(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg = [
        u16::from(bg_rgba[0]),
        u16::from(bg_rgba[1]),
        u16::from(bg_rgba[2]),
    ];

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        for i in 0..3 {
            let fg = if src_is_premul {
                u16::from(s[i])
            } else {
                u16::from(mul_div255_u8(u16::from(s[i]), a))
            };
            d[i] = (fg + u16::from(mul_div255_u8(bg[i], inv))).min(255) as u8;
        }
        d[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src == [0, 0, 0, 0] {
        return dst;
    }

    let inv = 255u16 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv)))
}

/// Composite `src` over `dst` pixel by pixel; both must be RGBA8 of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> IdentimorphResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(IdentimorphError::invalid_parameter(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

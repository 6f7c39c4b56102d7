use crate::foundation::error::{IdentimorphError, IdentimorphResult};

/// Kernel radius used for a glow of standard deviation `glow` pixels (`3 * sigma`).
pub fn glow_kernel_radius(glow: u32) -> u32 {
    glow.saturating_mul(3)
}

/// Separable Gaussian blur over a premultiplied RGBA8 buffer, clamping at the edges.
///
/// Fixed-point Q16 weights keep the result bit-exact across platforms.
pub fn blur_premul_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> IdentimorphResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| IdentimorphError::invalid_parameter("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(IdentimorphError::invalid_parameter(
            "blur_premul_rgba8 expects src matching width*height*4",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = GaussianKernel::new(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    kernel.convolve(src, &mut tmp, width, height, Axis::Horizontal);
    kernel.convolve(&tmp, &mut out, width, height, Axis::Vertical);
    Ok(out)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Normalized Gaussian weights in Q16; they sum to exactly `1 << 16`.
#[derive(Clone, Debug)]
struct GaussianKernel {
    weights: Vec<u32>,
}

impl GaussianKernel {
    const ONE: i64 = 1 << 16;

    fn new(radius: u32, sigma: f32) -> IdentimorphResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(IdentimorphError::invalid_parameter("blur sigma must be > 0"));
        }

        let r = radius as i64;
        let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
        let raw: Vec<f64> = (-r..=r)
            .map(|i| {
                let x = i as f64;
                (-x * x / denom).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(IdentimorphError::invalid_parameter(
                "gaussian kernel sum is zero",
            ));
        }

        let mut weights: Vec<u32> = raw
            .iter()
            .map(|w| ((w / sum) * Self::ONE as f64).round().clamp(0.0, Self::ONE as f64) as u32)
            .collect();

        // Push rounding drift into the center tap so the kernel preserves energy.
        let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + Self::ONE - acc).clamp(0, Self::ONE) as u32;

        Ok(Self { weights })
    }

    fn radius(&self) -> i64 {
        (self.weights.len() / 2) as i64
    }

    fn convolve(&self, src: &[u8], dst: &mut [u8], width: u32, height: u32, axis: Axis) {
        let (w, h) = (i64::from(width), i64::from(height));
        let radius = self.radius();
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in self.weights.iter().enumerate() {
                    let d = ki as i64 - radius;
                    let (sx, sy) = match axis {
                        Axis::Horizontal => ((x + d).clamp(0, w - 1), y),
                        Axis::Vertical => (x, (y + d).clamp(0, h - 1)),
                    };
                    let idx = ((sy * w + sx) as usize) * 4;
                    for (c, a) in acc.iter_mut().enumerate() {
                        *a += u64::from(kw) * u64::from(src[idx + c]);
                    }
                }
                let out_idx = ((y * w + x) as usize) * 4;
                for (c, a) in acc.iter().enumerate() {
                    dst[out_idx + c] = q16_to_u8(*a);
                }
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{IdentimorphError, IdentimorphResult};

/// One rendered animation frame.
///
/// Pixels are RGBA8, tightly packed, row-major. Every pixel is fully opaque, so premultiplied
/// and straight alpha coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl Frame {
    /// A `width x height` frame filled with `bg`.
    pub fn blank(width: u32, height: u32, bg: Rgb8) -> IdentimorphResult<Self> {
        let pixels = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| IdentimorphError::invalid_parameter("frame size overflow"))?;
        let data = bg.to_rgba8().repeat(pixels);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index_of(x, y);
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Fill the inclusive pixel rectangle `x0..=x1, y0..=y1` with `color`, clipped to the frame.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb8) {
        if self.width == 0 || self.height == 0 || x0 >= self.width || y0 >= self.height {
            return;
        }
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        let px = color.to_rgba8();
        for y in y0..=y1 {
            let start = self.index_of(x0, y);
            let end = self.index_of(x1, y) + 4;
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Mutable RGBA8 bytes of row `y`, columns `x0..=x1`.
    pub(crate) fn row_span_mut(&mut self, y: u32, x0: u32, x1: u32) -> &mut [u8] {
        let start = self.index_of(x0, y);
        let end = self.index_of(x1, y) + 4;
        &mut self.data[start..end]
    }

    /// Copy into an [`image::RgbaImage`] for encoding.
    pub fn to_rgba_image(&self) -> IdentimorphResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            IdentimorphError::encode("frame buffer does not match width*height*4")
        })
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

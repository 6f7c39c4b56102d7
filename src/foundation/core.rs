use crate::foundation::error::{IdentimorphError, IdentimorphResult};

pub use kurbo::Rect;

/// Fill color of every frame before blocks are drawn.
pub const BACKGROUND_RGB: Rgb8 = Rgb8::new(240, 240, 240);

/// 0-based index of a frame within an animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Zero-based grid cell coordinate (`row` is y, `col` is x).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellCoord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl CellCoord {
    /// Create a coordinate from `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA8 pixel (identical premultiplied or straight).
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Playback rate in whole frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Fps(u32);

impl Fps {
    /// Create a validated FPS value.
    pub fn new(fps: u32) -> IdentimorphResult<Self> {
        if fps == 0 {
            return Err(IdentimorphError::invalid_parameter("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    pub(crate) const fn from_raw(fps: u32) -> Self {
        Self(fps)
    }

    /// Raw frames-per-second value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Display duration of one frame in milliseconds (`1000 / fps`, truncated).
    ///
    /// An unvalidated zero rate maps to zero rather than dividing by zero.
    pub fn frame_duration_ms(self) -> u32 {
        1000u32.checked_div(self.0).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

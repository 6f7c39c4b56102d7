use crate::foundation::core::{BACKGROUND_RGB, CellCoord, Rect, Rgb8};
use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::identity::digest::Digest;
use crate::identity::grid::ActivationGrid;
use crate::identity::palette::cell_color;
use crate::render::blur::{blur_premul_rgba8, glow_kernel_radius};
use crate::render::composite::over_in_place;
use crate::render::frame::Frame;

/// Pixel bounds of one block, inclusive on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRect {
    /// Left column.
    pub x0: u32,
    /// Top row.
    pub y0: u32,
    /// Right column (inclusive).
    pub x1: u32,
    /// Bottom row (inclusive).
    pub y1: u32,
}

impl BlockRect {
    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.y1 - self.y0 + 1
    }

    /// Clip to a `width x height` frame; `None` when nothing remains.
    pub fn clip(self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 || self.x0 >= width || self.y0 >= height {
            return None;
        }
        Some(Self {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1.min(width - 1),
            y1: self.y1.min(height - 1),
        })
    }

    fn expand_within(self, by: u32, width: u32, height: u32) -> Self {
        Self {
            x0: self.x0.saturating_sub(by),
            y0: self.y0.saturating_sub(by),
            x1: self.x1.saturating_add(by).min(width - 1),
            y1: self.y1.saturating_add(by).min(height - 1),
        }
    }
}

/// Fractional pixel bounds of `cell` for blocks `block_size` pixels wide.
pub fn cell_bounds(cell: CellCoord, block_size: f64) -> Rect {
    Rect::new(
        cell.col as f64 * block_size,
        cell.row as f64 * block_size,
        (cell.col + 1) as f64 * block_size,
        (cell.row + 1) as f64 * block_size,
    )
}

/// Integer block bounds: every corner of [`cell_bounds`] truncated toward zero.
pub fn block_rect(cell: CellCoord, block_size: f64) -> BlockRect {
    let r = cell_bounds(cell, block_size);
    BlockRect {
        x0: r.x0 as u32,
        y0: r.y0 as u32,
        x1: r.x1 as u32,
        y1: r.y1 as u32,
    }
}

/// Geometry and effect settings shared by every frame of one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterParams {
    /// Square frame side in pixels.
    pub size: u32,
    /// Block side in pixels (`size / blocks`, fractional).
    pub block_size: f64,
    /// Glow blur standard deviation in pixels; `0` disables glow.
    pub glow: u32,
}

impl RasterParams {
    /// Params for a `size x size` frame split into `blocks` blocks per side.
    pub fn new(size: u32, blocks: usize, glow: u32) -> IdentimorphResult<Self> {
        if size == 0 {
            return Err(IdentimorphError::invalid_parameter("size must be > 0"));
        }
        if blocks == 0 {
            return Err(IdentimorphError::empty_frame_sequence(
                "cannot rasterize a grid with zero blocks",
            ));
        }
        Ok(Self {
            size,
            block_size: f64::from(size) / blocks as f64,
            glow,
        })
    }
}

/// Draw `cells` in the given order onto a fresh background frame.
///
/// Activity is not checked here; callers pass only the cells they want drawn. With glow, each
/// block's blurred halo is composited first and the sharp block pasted over it, so later
/// blocks cover the halos of earlier ones.
pub fn rasterize_cells<I>(
    cells: I,
    digest: &Digest,
    params: &RasterParams,
) -> IdentimorphResult<Frame>
where
    I: IntoIterator<Item = CellCoord>,
{
    let mut frame = Frame::blank(params.size, params.size, BACKGROUND_RGB)?;
    for cell in cells {
        let Some(rect) = block_rect(cell, params.block_size).clip(frame.width, frame.height)
        else {
            continue;
        };
        let color = cell_color(digest, cell);
        if params.glow > 0 {
            composite_glow(&mut frame, rect, color, params.glow)?;
        }
        frame.fill_rect(rect.x0, rect.y0, rect.x1, rect.y1, color);
    }
    Ok(frame)
}

/// Draw every active cell of `grid` in row-major order.
pub fn rasterize_grid(
    grid: &ActivationGrid,
    digest: &Digest,
    params: &RasterParams,
) -> IdentimorphResult<Frame> {
    rasterize_cells(grid.active_cells(), digest, params)
}

// Only the block's bounding box grown by the kernel radius can receive glow, so the blur
// runs on that window instead of a full-frame layer.
fn composite_glow(
    frame: &mut Frame,
    rect: BlockRect,
    color: Rgb8,
    glow: u32,
) -> IdentimorphResult<()> {
    let radius = glow_kernel_radius(glow);
    let window = rect.expand_within(radius, frame.width, frame.height);
    let (ww, wh) = (window.width(), window.height());
    let stride = ww as usize * 4;

    let mut layer = vec![0u8; stride * wh as usize];
    let px = color.to_rgba8();
    for y in rect.y0..=rect.y1 {
        let start = (y - window.y0) as usize * stride + (rect.x0 - window.x0) as usize * 4;
        let end = start + rect.width() as usize * 4;
        for chunk in layer[start..end].chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    let halo = blur_premul_rgba8(&layer, ww, wh, radius, glow as f32)?;
    for (dy, src_row) in halo.chunks_exact(stride).enumerate() {
        let y = window.y0 + dy as u32;
        over_in_place(frame.row_span_mut(y, window.x0, window.x1), src_row)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;

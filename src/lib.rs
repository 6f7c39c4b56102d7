//! Identimorph turns a text seed into a small, looping, animated identicon.
//!
//! Everything is a pure function of the seed and a handful of numeric parameters: generating the
//! same [`IdentimorphConfig`] twice yields byte-identical frames.
//!
//! # Pipeline overview
//!
//! 1. **Digest**: `seed -> Digest` (SHA-256 of the seed's UTF-8 bytes)
//! 2. **Grid**: `Digest + blocks -> ActivationGrid` (left-right symmetric on/off cells)
//! 3. **Order** (spiral mode): `grid shape -> SpiralOrder` (clockwise, outside-in)
//! 4. **Rasterize**: `cells + Digest -> Frame` (colored blocks, optional glow halo)
//! 5. **Assemble**: frames + per-frame duration + loop flag -> [`Animation`]
//! 6. **Encode** (optional): stream an [`Animation`] into a [`FrameSink`] such as [`GifSink`]
//!
//! Two sequencing modes exist (see [`Mode`]):
//!
//! - **Classic**: frame `i` shows the complete grid of seed `"{seed}_{i}"`.
//! - **Spiral**: one grid, frame `k` reveals its active cells among the first `k + 1` spiral
//!   steps.
//!
//! ```no_run
//! use identimorph::{GifSink, GifSinkOpts, IdentimorphConfig, generate, render_into};
//!
//! let anim = generate(&IdentimorphConfig::spiral_default())?;
//! let mut sink = GifSink::new(GifSinkOpts::new("identimorph_spiral.gif"));
//! render_into(&anim, &mut sink)?;
//! # Ok::<(), identimorph::IdentimorphError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod identity;
mod render;

pub use crate::animation::assemble::{
    Animation, generate, generate_with_threading, render_frame, render_into,
};
pub use crate::animation::config::{
    DEFAULT_BLOCKS, DEFAULT_CLASSIC_SEED, DEFAULT_FRAME_COUNT, DEFAULT_SIZE, DEFAULT_SPIRAL_SEED,
    IdentimorphConfig, Mode, RenderThreading,
};
pub use crate::encode::gif::{
    GifSink, GifSinkOpts, animation_to_gif_bytes, encode_gif_to_writer, ensure_parent_dir,
};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{BACKGROUND_RGB, CellCoord, Fps, FrameIndex, Rect, Rgb8};
pub use crate::foundation::error::{IdentimorphError, IdentimorphResult};
pub use crate::identity::digest::{DIGEST_LEN, Digest, digest, frame_seed};
pub use crate::identity::grid::{ActivationGrid, MAX_BLOCKS, build_grid, half_width};
pub use crate::identity::palette::cell_color;
pub use crate::identity::spiral::{SpiralOrder, revealed_cells, spiral_order};
pub use crate::render::blur::{blur_premul_rgba8, glow_kernel_radius};
pub use crate::render::frame::Frame;
pub use crate::render::raster::{
    BlockRect, RasterParams, block_rect, cell_bounds, rasterize_cells, rasterize_grid,
};

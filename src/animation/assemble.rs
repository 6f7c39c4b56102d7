use rayon::prelude::*;

use crate::animation::config::{IdentimorphConfig, Mode, RenderThreading};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::identity::digest::{Digest, frame_seed};
use crate::identity::grid::{ActivationGrid, build_grid};
use crate::identity::spiral::{SpiralOrder, revealed_cells, spiral_order};
use crate::render::frame::Frame;
use crate::render::raster::{RasterParams, rasterize_cells, rasterize_grid};

/// A finished identimorph: equally sized frames shown for a uniform duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Frames in playback order; never empty.
    pub frames: Vec<Frame>,
    /// Display time of every frame in milliseconds.
    pub frame_duration_ms: u32,
    /// Whether playback loops forever.
    pub loop_forever: bool,
}

impl Animation {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false` for animations built by [`generate`].
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.frames.first().map_or(0, |f| f.width)
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.frames.first().map_or(0, |f| f.height)
    }
}

/// Per-mode state computed once, from which any frame can be rendered independently.
enum FramePlan<'a> {
    Classic {
        seed: &'a str,
        frame_count: u64,
        blocks: usize,
        params: RasterParams,
    },
    Spiral {
        digest: Digest,
        grid: ActivationGrid,
        order: SpiralOrder,
        params: RasterParams,
    },
}

impl<'a> FramePlan<'a> {
    fn new(config: &'a IdentimorphConfig) -> IdentimorphResult<Self> {
        let blocks = config.blocks();
        let params = RasterParams::new(config.size, blocks, config.glow)?;
        match config.mode {
            Mode::Classic { frame_count, .. } => Ok(Self::Classic {
                seed: &config.seed,
                frame_count: u64::from(frame_count),
                blocks,
                params,
            }),
            Mode::Spiral { .. } => {
                let digest = Digest::of_seed(&config.seed);
                let grid = build_grid(&digest, blocks)?;
                let (height, width) = grid.shape();
                let order = spiral_order(height, width);
                Ok(Self::Spiral {
                    digest,
                    grid,
                    order,
                    params,
                })
            }
        }
    }

    fn frame_count(&self) -> u64 {
        match self {
            Self::Classic { frame_count, .. } => *frame_count,
            Self::Spiral { order, .. } => order.len() as u64,
        }
    }

    fn render(&self, idx: FrameIndex) -> IdentimorphResult<Frame> {
        if idx.0 >= self.frame_count() {
            return Err(IdentimorphError::invalid_parameter(format!(
                "frame index {} out of range (animation has {} frames)",
                idx.0,
                self.frame_count()
            )));
        }
        let frame = match self {
            Self::Classic {
                seed,
                blocks,
                params,
                ..
            } => {
                let digest = Digest::of_seed(&frame_seed(seed, idx.0));
                let grid = build_grid(&digest, *blocks)?;
                tracing::trace!(frame = idx.0, active = grid.active_count(), "classic frame");
                rasterize_grid(&grid, &digest, params)?
            }
            Self::Spiral {
                digest,
                grid,
                order,
                params,
            } => {
                let step_limit = idx.0 as usize;
                tracing::trace!(frame = idx.0, step_limit, "spiral frame");
                rasterize_cells(revealed_cells(order, grid, step_limit), digest, params)?
            }
        };
        Ok(frame)
    }
}

/// Generate the whole animation described by `config`, one frame after another.
pub fn generate(config: &IdentimorphConfig) -> IdentimorphResult<Animation> {
    generate_with_threading(config, &RenderThreading::default())
}

/// Generate the animation, optionally rasterizing frames in parallel.
///
/// Frames depend only on their own index, so the parallel path returns exactly the frames the
/// sequential one does.
#[tracing::instrument(skip(config), fields(mode = config.mode.name(), seed = %config.seed))]
pub fn generate_with_threading(
    config: &IdentimorphConfig,
    threading: &RenderThreading,
) -> IdentimorphResult<Animation> {
    config.validate()?;
    let plan = FramePlan::new(config)?;
    let count = plan.frame_count();
    if count == 0 {
        return Err(IdentimorphError::empty_frame_sequence(
            "animation would contain no frames",
        ));
    }

    let frames = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let rendered = pool.install(|| {
            (0..count)
                .into_par_iter()
                .map(|i| plan.render(FrameIndex(i)))
                .collect::<Vec<_>>()
        });
        rendered.into_iter().collect::<IdentimorphResult<Vec<_>>>()?
    } else {
        (0..count)
            .map(|i| plan.render(FrameIndex(i)))
            .collect::<IdentimorphResult<Vec<_>>>()?
    };

    let animation = Animation {
        frames,
        frame_duration_ms: config.frame_duration_ms(),
        loop_forever: true,
    };
    tracing::info!(
        frames = animation.len(),
        size = config.size,
        frame_duration_ms = animation.frame_duration_ms,
        "identimorph generated"
    );
    Ok(animation)
}

/// Render the single frame `idx` of the animation described by `config`.
pub fn render_frame(config: &IdentimorphConfig, idx: FrameIndex) -> IdentimorphResult<Frame> {
    config.validate()?;
    FramePlan::new(config)?.render(idx)
}

/// Stream `animation` into `sink` in playback order.
pub fn render_into(animation: &Animation, sink: &mut dyn FrameSink) -> IdentimorphResult<()> {
    if animation.is_empty() {
        return Err(IdentimorphError::empty_frame_sequence(
            "refusing to write an animation without frames",
        ));
    }
    sink.begin(SinkConfig {
        width: animation.width(),
        height: animation.height(),
        frame_duration_ms: animation.frame_duration_ms,
        loop_forever: animation.loop_forever,
    })?;
    for (i, frame) in animation.frames.iter().enumerate() {
        tracing::debug!(frame = i, "push frame");
        sink.push_frame(FrameIndex(i as u64), frame)?;
    }
    sink.end()
}

fn build_thread_pool(threads: Option<usize>) -> IdentimorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IdentimorphError::invalid_parameter(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        IdentimorphError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/assemble.rs"]
mod tests;

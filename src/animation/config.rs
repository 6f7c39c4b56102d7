use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Fps;
use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::identity::grid::MAX_BLOCKS;

/// Blocks per side used when a configuration does not say otherwise.
pub const DEFAULT_BLOCKS: u32 = 5;
/// Default frame side in pixels.
pub const DEFAULT_SIZE: u32 = 128;
/// Default classic-mode frame count.
pub const DEFAULT_FRAME_COUNT: u32 = 12;
/// Default seed of the classic animation.
pub const DEFAULT_CLASSIC_SEED: &str = "github.com/j-ncel";
/// Default seed of the spiral animation.
pub const DEFAULT_SPIRAL_SEED: &str = "github.com/jncel";

fn default_blocks() -> u32 {
    DEFAULT_BLOCKS
}

/// How frames differ from one another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Frame `i` shows the full grid of seed `"{seed}_{i}"`.
    Classic {
        /// Number of frames (>= 1).
        frame_count: u32,
        /// Blocks per side (1..=7).
        #[serde(default = "default_blocks")]
        blocks: u32,
    },
    /// One grid revealed cell by cell in spiral order, one frame per cell.
    Spiral {
        /// Blocks per side (1..=7).
        #[serde(default = "default_blocks")]
        blocks: u32,
    },
}

impl Mode {
    /// Blocks per side.
    pub fn blocks(self) -> u32 {
        match self {
            Self::Classic { blocks, .. } | Self::Spiral { blocks } => blocks,
        }
    }

    /// Short name used in logs and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic { .. } => "classic",
            Self::Spiral { .. } => "spiral",
        }
    }

    /// Frames this mode produces once validated.
    pub fn frame_count(self) -> u64 {
        match self {
            Self::Classic { frame_count, .. } => u64::from(frame_count),
            Self::Spiral { blocks } => u64::from(blocks) * u64::from(blocks),
        }
    }

    fn default_fps(self) -> Fps {
        match self {
            Self::Classic { .. } => Fps::from_raw(1),
            Self::Spiral { .. } => Fps::from_raw(5),
        }
    }
}

/// Everything needed to generate one animation.
///
/// Build one directly, start from [`IdentimorphConfig::classic_default`] /
/// [`IdentimorphConfig::spiral_default`], or load JSON with [`IdentimorphConfig::from_path`].
/// [`IdentimorphConfig::validate`] runs before any pixel is drawn.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdentimorphConfig {
    /// Text the animation is derived from; must be non-empty.
    pub seed: String,
    /// Square frame side in pixels (>= blocks).
    pub size: u32,
    /// Glow blur radius in pixels; `0` disables glow.
    pub glow: u32,
    /// Playback rate.
    pub fps: Fps,
    /// Classic or spiral sequencing.
    pub mode: Mode,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IdentimorphConfigDef {
    seed: String,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    glow: u32,
    #[serde(default)]
    fps: Option<Fps>,
    mode: Mode,
}

impl From<IdentimorphConfigDef> for IdentimorphConfig {
    fn from(def: IdentimorphConfigDef) -> Self {
        let fps = def.fps.unwrap_or_else(|| def.mode.default_fps());
        Self {
            seed: def.seed,
            size: def.size.unwrap_or(DEFAULT_SIZE),
            glow: def.glow,
            fps,
            mode: def.mode,
        }
    }
}

impl<'de> Deserialize<'de> for IdentimorphConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        IdentimorphConfigDef::deserialize(deserializer).map(Self::from)
    }
}

impl IdentimorphConfig {
    /// Classic animation with the stock parameters: 12 frames, 5 blocks, 128 px, 1 fps.
    pub fn classic_default() -> Self {
        Self::new(
            DEFAULT_CLASSIC_SEED,
            Mode::Classic {
                frame_count: DEFAULT_FRAME_COUNT,
                blocks: DEFAULT_BLOCKS,
            },
        )
    }

    /// Spiral animation with the stock parameters: 5 blocks, 128 px, 5 fps.
    pub fn spiral_default() -> Self {
        Self::new(
            DEFAULT_SPIRAL_SEED,
            Mode::Spiral {
                blocks: DEFAULT_BLOCKS,
            },
        )
    }

    /// Config for `seed` in `mode`, with default size, no glow and the mode's default fps.
    pub fn new(seed: impl Into<String>, mode: Mode) -> Self {
        IdentimorphConfigDef {
            seed: seed.into(),
            size: None,
            glow: 0,
            fps: None,
            mode,
        }
        .into()
    }

    /// Parse a JSON config from a reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> IdentimorphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| IdentimorphError::config(format!("parse identimorph config JSON: {e}")))
    }

    /// Parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> IdentimorphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            IdentimorphError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Blocks per side as an index type.
    pub fn blocks(&self) -> usize {
        self.mode.blocks() as usize
    }

    /// Per-frame display duration in milliseconds.
    pub fn frame_duration_ms(&self) -> u32 {
        self.fps.frame_duration_ms()
    }

    /// Check every parameter against its documented range.
    pub fn validate(&self) -> IdentimorphResult<()> {
        if self.seed.is_empty() {
            return Err(IdentimorphError::invalid_parameter("seed must be non-empty"));
        }
        if self.size == 0 {
            return Err(IdentimorphError::invalid_parameter("size must be > 0"));
        }
        if self.fps.get() == 0 {
            return Err(IdentimorphError::invalid_parameter("fps must be > 0"));
        }

        let blocks = self.mode.blocks();
        if blocks == 0 {
            return Err(IdentimorphError::empty_frame_sequence(
                "blocks must be > 0 (a zero-area grid has no frames)",
            ));
        }
        if blocks as usize > MAX_BLOCKS {
            return Err(IdentimorphError::invalid_parameter(format!(
                "blocks must be <= {MAX_BLOCKS} (got {blocks})"
            )));
        }
        if self.size < blocks {
            return Err(IdentimorphError::invalid_parameter(format!(
                "size ({}) must be >= blocks ({blocks})",
                self.size
            )));
        }
        if let Mode::Classic { frame_count: 0, .. } = self.mode {
            return Err(IdentimorphError::empty_frame_sequence(
                "classic mode needs frame_count > 0",
            ));
        }
        Ok(())
    }
}

/// Frame-level parallelism for [`generate_with_threading`](crate::generate_with_threading).
///
/// Output is byte-identical whichever settings are used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Rasterize frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide. Must be >= 1 when set.
    pub threads: Option<usize>,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;

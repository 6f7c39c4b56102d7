use image::codecs::gif::{GifEncoder, Repeat};
use image::Delay;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::animation::assemble::Animation;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{IdentimorphError, IdentimorphResult};
use crate::render::frame::Frame;

/// NeuQuant sampling factor (1 = best quality, 30 = fastest).
const GIF_QUANTIZE_SPEED: i32 = 10;

/// Options for [`GifSink`].
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl GifSinkOpts {
    /// Write to `out_path`, overwriting any existing file.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Sink that collects frames and writes an animated GIF on `end`.
#[derive(Debug)]
pub struct GifSink {
    opts: GifSinkOpts,
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    last_idx: Option<FrameIndex>,
}

impl GifSink {
    /// Create a sink writing to `opts.out_path`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            cfg: None,
            frames: Vec::new(),
            last_idx: None,
        }
    }
}

impl FrameSink for GifSink {
    #[tracing::instrument(skip(self), fields(out = %self.opts.out_path.display()))]
    fn begin(&mut self, cfg: SinkConfig) -> IdentimorphResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(IdentimorphError::invalid_parameter(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(IdentimorphError::invalid_parameter(
                "gif frames are limited to 65535x65535",
            ));
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(IdentimorphError::invalid_parameter(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        ensure_parent_dir(&self.opts.out_path)?;

        self.cfg = Some(cfg);
        self.frames.clear();
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> IdentimorphResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| IdentimorphError::encode("gif sink: push_frame before begin"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(IdentimorphError::encode(format!(
                "gif sink: frame {} pushed after frame {}",
                idx.0, last.0
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(IdentimorphError::encode(format!(
                "gif sink: frame is {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        self.frames.push(frame.clone());
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> IdentimorphResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| IdentimorphError::encode("gif sink: end before begin"))?;
        let frames = std::mem::take(&mut self.frames);

        let path = &self.opts.out_path;
        let file = File::create(path).map_err(|e| {
            IdentimorphError::encode(format!("create gif '{}': {e}", path.display()))
        })?;
        let mut w = BufWriter::new(file);
        encode_gif_to_writer(&mut w, &frames, cfg.frame_duration_ms, cfg.loop_forever)?;
        w.flush()
            .map_err(|e| IdentimorphError::encode(format!("flush gif '{}': {e}", path.display())))?;

        tracing::info!(frames = frames.len(), out = %path.display(), "gif written");
        Ok(())
    }
}

/// Encode `frames` as an animated GIF into `w`.
///
/// Every frame is shown for `frame_duration_ms`; with `loop_forever` the GIF repeats endlessly,
/// otherwise it plays once.
pub fn encode_gif_to_writer<W: Write>(
    w: W,
    frames: &[Frame],
    frame_duration_ms: u32,
    loop_forever: bool,
) -> IdentimorphResult<()> {
    if frames.is_empty() {
        return Err(IdentimorphError::empty_frame_sequence(
            "a gif needs at least one frame",
        ));
    }

    let mut enc = GifEncoder::new_with_speed(w, GIF_QUANTIZE_SPEED);
    if loop_forever {
        enc.set_repeat(Repeat::Infinite)
            .map_err(|e| IdentimorphError::encode(format!("set gif repeat: {e}")))?;
    }
    let delay = Delay::from_numer_denom_ms(frame_duration_ms, 1);
    for (i, frame) in frames.iter().enumerate() {
        let buffer = frame.to_rgba_image()?;
        enc.encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| IdentimorphError::encode(format!("encode gif frame {i}: {e}")))?;
    }
    Ok(())
}

/// Encode a whole [`Animation`] as GIF bytes in memory.
pub fn animation_to_gif_bytes(animation: &Animation) -> IdentimorphResult<Vec<u8>> {
    let mut out = Vec::new();
    encode_gif_to_writer(
        &mut out,
        &animation.frames,
        animation.frame_duration_ms,
        animation.loop_forever,
    )?;
    Ok(out)
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> IdentimorphResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;

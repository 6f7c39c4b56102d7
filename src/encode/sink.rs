use crate::foundation::core::FrameIndex;
use crate::foundation::error::IdentimorphResult;
use crate::render::frame::Frame;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Display time of every frame in milliseconds.
    pub frame_duration_ms: u32,
    /// Whether the animation loops forever.
    pub loop_forever: bool,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing [`FrameIndex`] values
/// between one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> IdentimorphResult<()>;
    /// Push one frame in playback order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> IdentimorphResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> IdentimorphResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Captured frames in playback order.
    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> IdentimorphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> IdentimorphResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> IdentimorphResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;

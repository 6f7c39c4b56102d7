//! Writers that consume finished frames.
//!
//! Sinks receive frames in playback order through [`FrameSink`](sink::FrameSink); the GIF sink
//! is the stock animated-image writer.

/// Animated GIF output via the `image` crate.
pub(crate) mod gif;
/// Generic frame sink trait and built-in sinks.
pub(crate) mod sink;

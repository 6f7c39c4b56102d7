/// Crate-wide result alias.
pub type IdentimorphResult<T> = Result<T, IdentimorphError>;

/// Errors surfaced by identimorph generation and encoding.
///
/// Every input problem is detected before any pixel is drawn, and none of them are transient:
/// the same inputs always fail the same way.
#[derive(thiserror::Error, Debug)]
pub enum IdentimorphError {
    /// A parameter is outside its valid range (too many blocks, zero size or fps, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The request would produce an animation without frames.
    #[error("empty frame sequence: {0}")]
    EmptyFrameSequence(String),

    /// A JSON configuration could not be opened or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The animated-image writer rejected the frames or failed to write them.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, with its original source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IdentimorphError {
    /// Build an [`IdentimorphError::InvalidParameter`].
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build an [`IdentimorphError::EmptyFrameSequence`].
    pub fn empty_frame_sequence(msg: impl Into<String>) -> Self {
        Self::EmptyFrameSequence(msg.into())
    }

    /// Build an [`IdentimorphError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`IdentimorphError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

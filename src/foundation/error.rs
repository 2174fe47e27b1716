/// Convenience result type used across the captioning engine.
pub type CaptionResult<T> = Result<T, CaptionError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CaptionError {
    /// The source animation or the font could not be read or decoded.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Composited frames could not be written back into an animation.
    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaptionError {
    /// Build a [`CaptionError::ResourceUnavailable`] value.
    pub fn resource_unavailable(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }

    /// Build a [`CaptionError::EncodingFailure`] value.
    pub fn encoding_failure(msg: impl Into<String>) -> Self {
        Self::EncodingFailure(msg.into())
    }

    /// Build a [`CaptionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for failures caused by a missing or undecodable input resource.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

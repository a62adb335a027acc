/// Convenience result type used across Stillcast.
pub type StillcastResult<T> = Result<T, StillcastError>;

/// Top-level error taxonomy, one variant per conversion phase.
///
/// Each variant maps to a distinct diagnostic in HTTP responses; see
/// [`StillcastError::phase`].
#[derive(thiserror::Error, Debug)]
pub enum StillcastError {
    /// Non-positive or malformed duration/fps, or a missing form field.
    #[error("parameter error: {0}")]
    Parameter(String),

    /// The upload could not be received or staged.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// The uploaded bytes do not decode to an image raster.
    #[error("decode error: {0}")]
    Decode(String),

    /// The MP4 could not be produced for the given inputs.
    #[error("encode error: {0}")]
    Encode(String),

    /// The generated artifact could not be read for transmission.
    #[error("read-back error: {0}")]
    ReadBack(String),

    /// Scratch removal failed. Logged, never overrides an earlier error.
    #[error("cleanup error: {0}")]
    Cleanup(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StillcastError {
    /// Build a [`StillcastError::Parameter`] value.
    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::Parameter(msg.into())
    }

    /// Build a [`StillcastError::Ingest`] value.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Build a [`StillcastError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`StillcastError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`StillcastError::ReadBack`] value.
    pub fn read_back(msg: impl Into<String>) -> Self {
        Self::ReadBack(msg.into())
    }

    /// Build a [`StillcastError::Cleanup`] value.
    pub fn cleanup(msg: impl Into<String>) -> Self {
        Self::Cleanup(msg.into())
    }

    /// Name of the request phase this error belongs to.
    ///
    /// Used verbatim in HTTP error bodies so clients can tell which phase
    /// failed (ingest, convert, or read-back).
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Parameter(_) => "parameter",
            Self::Ingest(_) => "ingest",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
            Self::ReadBack(_) => "read-back",
            Self::Cleanup(_) => "cleanup",
            Self::Other(_) => "internal",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

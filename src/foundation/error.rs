/// Result alias used across the crate.
pub type CarDriveResult<T> = Result<T, CarDriveError>;

/// Error type for every fallible boundary of the car view (config, assets, rendering, encoding).
///
/// The view's own state machine never fails; errors only come from the collaborators around it.
#[derive(thiserror::Error, Debug)]
pub enum CarDriveError {
    /// Invalid configuration, script, or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Sprite loading, decoding, or rasterization failed.
    #[error("asset error: {0}")]
    Asset(String),

    /// Rendering surface or draw failure.
    #[error("render error: {0}")]
    Render(String),

    /// Video encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with context attached by `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarDriveError {
    /// Build a [`CarDriveError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarDriveError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`CarDriveError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CarDriveError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CarDriveError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CarDriveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

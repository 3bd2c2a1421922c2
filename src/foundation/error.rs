/// Convenience result type used across castage.
pub type CastageResult<T> = Result<T, CastageError>;

/// Error taxonomy for the boundary APIs (settings, document snapshots, field declarations).
///
/// The animation and timeline hot paths never fail; they clamp or fall back to defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum CastageError {
    /// Invalid caller-provided declaration or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CastageError {
    /// Build a [`CastageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CastageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CastageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

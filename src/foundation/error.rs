/// Convenience result type used across logoreveal.
pub type LogoResult<T> = Result<T, LogoError>;

/// Top-level error taxonomy.
///
/// Only boundary operations fail: loading configuration, parsing palette colors, allocating
/// off-screen buffers and exporting frames. The per-frame tick never returns an error.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// Invalid configuration value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// Off-screen text rasterization failed.
    #[error("raster error: {0}")]
    Raster(String),

    /// Render surface could not be created or read back.
    #[error("surface error: {0}")]
    Surface(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    /// Build a [`LogoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogoError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LogoError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`LogoError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`LogoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

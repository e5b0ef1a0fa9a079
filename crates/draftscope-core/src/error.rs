//! Error types for draftscope-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during content analysis.
///
/// Degenerate inputs (zero sentences, zero words, empty keyword) are
/// not errors; every analyzer defines a safe default for them. The
/// only rejected input is content that is blank after trimming.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The content field is empty or whitespace-only.
    #[error("Content is required.")]
    EmptyContent,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

//! Pipeline error types.

use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors that can occur when building pipeline components.
///
/// Encoding and assembly themselves are infallible: shape anomalies in the
/// input are normalized away, and an assembled-length mismatch is a
/// programming defect caught by debug assertions rather than surfaced as a
/// recoverable error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PipelineError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

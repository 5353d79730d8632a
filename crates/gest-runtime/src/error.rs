//! Runtime error types.

use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] gest_pipeline::PipelineError),

    #[error("Inference client error: {0}")]
    Client(#[from] gest_ml_client::InferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

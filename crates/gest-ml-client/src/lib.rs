//! Client for the Python gesture inference service.
//!
//! The pipeline produces 30-frame windows of 1662-float feature vectors;
//! this crate ships them to the classifier service as
//! `POST /predict { "keypoint": [[...], ...] }` and returns the parsed
//! prediction. Transport failures are reported to the caller and never fed
//! back into pipeline state.

pub mod client;
pub mod error;
pub mod types;

pub use client::{InferClient, InferClientConfig};
pub use error::{InferError, InferResult};
pub use types::{HealthResponse, PredictRequest, PredictResponse};

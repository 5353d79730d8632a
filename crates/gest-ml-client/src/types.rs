//! Inference service request/response types.

use serde::{Deserialize, Serialize};

use gest_pipeline::FrameVector;

/// Request body for window classification.
///
/// `keypoint` is the temporal window: one inner array of 1662 floats per
/// frame, oldest frame first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Frame feature vectors, oldest first
    pub keypoint: Vec<Vec<f32>>,
}

impl PredictRequest {
    /// Build a request from a window snapshot.
    pub fn from_window(window: &[FrameVector]) -> Self {
        Self {
            keypoint: window.iter().map(|f| f.as_slice().to_vec()).collect(),
        }
    }

    /// Number of frames in the request.
    pub fn window_len(&self) -> usize {
        self.keypoint.len()
    }
}

/// Response from window classification.
///
/// The service's contract is loose: `prediction` is the classified label
/// when present, and any additional fields are retained for logging. The
/// pipeline takes no action on the contents either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted gesture/sign label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    /// Classifier confidence, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Any other fields the service returns
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single estimated body keypoint in normalized image coordinates.
///
/// `x` and `y` are normalized to the frame (0.0 to 1.0), `z` is relative
/// depth with the hip/wrist origin defined by the upstream estimator.
/// `visibility` is a detection-confidence score and is only populated for
/// pose points; face and hand points carry coordinates alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LandmarkPoint {
    /// X coordinate (0.0 = left, 1.0 = right)
    pub x: f32,
    /// Y coordinate (0.0 = top, 1.0 = bottom)
    pub y: f32,
    /// Relative depth
    pub z: f32,
    /// Detection confidence (pose points only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl LandmarkPoint {
    /// Create a coordinate-only point (face/hand parts).
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Create a point carrying a visibility score (pose part).
    pub fn with_visibility(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility: Some(visibility),
        }
    }
}

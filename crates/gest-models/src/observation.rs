use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::landmark::LandmarkPoint;

/// One frame's raw detection result from the holistic estimator.
///
/// Each part is optional: the estimator omits a sequence entirely when the
/// part is not detected, and a present sequence may be shorter than the
/// nominal point count. Field names follow the estimator's camelCase JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LandmarkObservation {
    /// Body pose landmarks (up to 33 points, each with visibility)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<Vec<LandmarkPoint>>,
    /// Face-mesh landmarks (up to 468 points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<Vec<LandmarkPoint>>,
    /// Left-hand landmarks (up to 21 points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<Vec<LandmarkPoint>>,
    /// Right-hand landmarks (up to 21 points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<Vec<LandmarkPoint>>,
}

impl LandmarkObservation {
    /// An observation with no detections at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if at least one hand part is present and non-empty.
    pub fn has_hand_landmarks(&self) -> bool {
        let present = |part: &Option<Vec<LandmarkPoint>>| {
            part.as_ref().map(|points| !points.is_empty()).unwrap_or(false)
        };
        present(&self.left_hand) || present(&self.right_hand)
    }
}

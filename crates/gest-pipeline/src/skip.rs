//! Frame skip policies.
//!
//! A skip policy decides whether a frame is excluded from the temporal
//! window. Skipped frames are still rendered; only encoding and window
//! membership are gated.

use gest_models::LandmarkObservation;

/// Replaceable predicate over a frame's landmark observation.
pub trait SkipPolicy: Send {
    /// True if this frame should not be encoded or pushed into the window.
    fn should_skip(&self, observation: &LandmarkObservation) -> bool;
}

/// Skip frames with no hand detections.
///
/// Hand presence is the informative signal for the downstream gesture
/// classifier; frames without hand data add no discriminative value and
/// would dilute the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandPresence;

impl SkipPolicy for HandPresence {
    fn should_skip(&self, observation: &LandmarkObservation) -> bool {
        !observation.has_hand_landmarks()
    }
}

/// Accept every frame. Useful for pose- or face-only experiments where hand
/// presence is not the gating signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SkipPolicy for AcceptAll {
    fn should_skip(&self, _observation: &LandmarkObservation) -> bool {
        false
    }
}

//! Landmark-to-feature encoding.
//!
//! Converts one part's raw landmark sequence into a fixed-length float
//! vector. The output length is exact regardless of input shape: an absent
//! part becomes all zeros, a short sequence is right-padded with zeros, and
//! an overlong sequence is truncated to the earliest points.

use gest_models::{
    layout, LandmarkPoint, FACE_COMPONENTS, FACE_POINTS, HAND_COMPONENTS, HAND_POINTS,
    POSE_POINTS,
};

/// Flatten a landmark sequence into exactly `expected_count * components`
/// floats.
///
/// Each point contributes its components in (x, y, z[, visibility]) order;
/// a missing visibility on a 4-component point contributes `0.0`. `None`
/// yields an all-zero vector. Truncation keeps the earliest values, padding
/// appends zeros, so the result length never deviates.
pub fn flatten_landmarks(
    points: Option<&[LandmarkPoint]>,
    expected_count: usize,
    components: usize,
) -> Vec<f32> {
    let expected_len = expected_count * components;

    let Some(points) = points else {
        return vec![0.0; expected_len];
    };

    let mut flattened = Vec::with_capacity(expected_len.max(points.len() * components));
    for point in points {
        flattened.push(point.x);
        flattened.push(point.y);
        flattened.push(point.z);
        if components == 4 {
            flattened.push(point.visibility.unwrap_or(0.0));
        }
    }

    flattened.truncate(expected_len);
    flattened.resize(expected_len, 0.0);
    flattened
}

/// Encodes the four landmark parts of an observation into part vectors.
///
/// The pose part's component width follows the visibility setting; face and
/// hand parts are always 3-wide.
#[derive(Debug, Clone, Copy)]
pub struct LandmarkEncoder {
    include_visibility: bool,
}

impl LandmarkEncoder {
    pub fn new(include_visibility: bool) -> Self {
        Self { include_visibility }
    }

    pub fn include_visibility(&self) -> bool {
        self.include_visibility
    }

    /// Encode the pose part (33 points, 3 or 4 components each).
    pub fn encode_pose(&self, points: Option<&[LandmarkPoint]>) -> Vec<f32> {
        flatten_landmarks(
            points,
            POSE_POINTS,
            layout::pose_components(self.include_visibility),
        )
    }

    /// Encode the face part (468 points, 3 components each).
    pub fn encode_face(&self, points: Option<&[LandmarkPoint]>) -> Vec<f32> {
        flatten_landmarks(points, FACE_POINTS, FACE_COMPONENTS)
    }

    /// Encode one hand part (21 points, 3 components each).
    pub fn encode_hand(&self, points: Option<&[LandmarkPoint]>) -> Vec<f32> {
        flatten_landmarks(points, HAND_POINTS, HAND_COMPONENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gest_models::{FACE_LEN, HAND_LEN};

    fn hand_points(count: usize) -> Vec<LandmarkPoint> {
        // 0.25/0.5 offsets are exactly representable, so equality asserts
        // stay stable.
        (0..count)
            .map(|i| LandmarkPoint::new(i as f32, i as f32 + 0.25, i as f32 + 0.5))
            .collect()
    }

    #[test]
    fn test_absent_part_is_all_zeros() {
        let encoded = flatten_landmarks(None, HAND_POINTS, HAND_COMPONENTS);
        assert_eq!(encoded.len(), HAND_LEN);
        assert!(encoded.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_exact_count_flattens_in_point_order() {
        let points = hand_points(HAND_POINTS);
        let encoded = flatten_landmarks(Some(&points), HAND_POINTS, HAND_COMPONENTS);
        assert_eq!(encoded.len(), HAND_LEN);
        assert_eq!(&encoded[..3], &[0.0, 0.25, 0.5]);
        assert_eq!(&encoded[3..6], &[1.0, 1.25, 1.5]);
    }

    #[test]
    fn test_short_sequence_is_right_padded() {
        let points = hand_points(5);
        let encoded = flatten_landmarks(Some(&points), HAND_POINTS, HAND_COMPONENTS);
        assert_eq!(encoded.len(), HAND_LEN);
        assert_eq!(encoded[14], 4.5);
        assert!(encoded[15..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_overlong_sequence_keeps_earliest_points() {
        let points = hand_points(HAND_POINTS + 7);
        let encoded = flatten_landmarks(Some(&points), HAND_POINTS, HAND_COMPONENTS);
        assert_eq!(encoded.len(), HAND_LEN);
        // Last retained value belongs to point 20, not to any excess point.
        assert_eq!(encoded[HAND_LEN - 1], 20.5);
    }

    #[test]
    fn test_empty_sequence_is_all_zeros() {
        let encoded = flatten_landmarks(Some(&[]), FACE_POINTS, FACE_COMPONENTS);
        assert_eq!(encoded.len(), FACE_LEN);
        assert!(encoded.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_pose_visibility_component() {
        let points = vec![LandmarkPoint::with_visibility(0.1, 0.2, 0.3, 0.9)];
        let encoder = LandmarkEncoder::new(true);
        let encoded = encoder.encode_pose(Some(&points));
        assert_eq!(encoded.len(), 132);
        assert_eq!(&encoded[..4], &[0.1, 0.2, 0.3, 0.9]);
    }

    #[test]
    fn test_missing_visibility_defaults_to_zero() {
        let points = vec![LandmarkPoint::new(0.1, 0.2, 0.3)];
        let encoder = LandmarkEncoder::new(true);
        let encoded = encoder.encode_pose(Some(&points));
        assert_eq!(&encoded[..4], &[0.1, 0.2, 0.3, 0.0]);
    }

    #[test]
    fn test_pose_without_visibility_is_three_wide() {
        let points = vec![LandmarkPoint::with_visibility(0.1, 0.2, 0.3, 0.9)];
        let encoder = LandmarkEncoder::new(false);
        let encoded = encoder.encode_pose(Some(&points));
        assert_eq!(encoded.len(), 99);
        // Visibility is dropped entirely, not interleaved.
        assert_eq!(&encoded[..6], &[0.1, 0.2, 0.3, 0.0, 0.0, 0.0]);
    }
}

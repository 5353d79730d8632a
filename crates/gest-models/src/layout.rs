//! Landmark layout constants.
//!
//! The holistic estimator reports four parts per frame. Each part flattens
//! to a fixed-length float vector regardless of how many points were
//! actually detected, so every downstream consumer can rely on exact
//! offsets:
//!
//! | part       | points | components | length |
//! |------------|--------|------------|--------|
//! | pose       | 33     | 4 (x,y,z,visibility) | 132 |
//! | face       | 468    | 3 (x,y,z)  | 1404   |
//! | left hand  | 21     | 3 (x,y,z)  | 63     |
//! | right hand | 21     | 3 (x,y,z)  | 63     |
//!
//! Whole-frame vector: `[pose, face, left hand, right hand]` = 1662 floats.
//! When visibility encoding is disabled the pose part narrows to 3
//! components per point (99 floats, 1629 per frame).

/// Number of pose landmarks reported by the estimator.
pub const POSE_POINTS: usize = 33;

/// Number of face-mesh landmarks reported by the estimator.
pub const FACE_POINTS: usize = 468;

/// Number of landmarks per hand.
pub const HAND_POINTS: usize = 21;

/// Components per face point (x, y, z).
pub const FACE_COMPONENTS: usize = 3;

/// Components per hand point (x, y, z).
pub const HAND_COMPONENTS: usize = 3;

/// Flattened face part length.
pub const FACE_LEN: usize = FACE_POINTS * FACE_COMPONENTS;

/// Flattened length of one hand part.
pub const HAND_LEN: usize = HAND_POINTS * HAND_COMPONENTS;

/// Whole-frame vector length with visibility encoding enabled.
pub const FRAME_LEN: usize = POSE_POINTS * 4 + FACE_LEN + 2 * HAND_LEN;

/// Components per pose point for the given visibility setting.
pub const fn pose_components(include_visibility: bool) -> usize {
    if include_visibility {
        4
    } else {
        3
    }
}

/// Flattened pose part length for the given visibility setting.
pub const fn pose_len(include_visibility: bool) -> usize {
    POSE_POINTS * pose_components(include_visibility)
}

/// Whole-frame vector length for the given visibility setting.
pub const fn frame_len(include_visibility: bool) -> usize {
    pose_len(include_visibility) + FACE_LEN + 2 * HAND_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_lengths() {
        assert_eq!(pose_len(true), 132);
        assert_eq!(pose_len(false), 99);
        assert_eq!(FACE_LEN, 1404);
        assert_eq!(HAND_LEN, 63);
    }

    #[test]
    fn test_frame_lengths() {
        assert_eq!(frame_len(true), 1662);
        assert_eq!(frame_len(true), FRAME_LEN);
        assert_eq!(frame_len(false), 1629);
    }
}

//! Whole-frame feature assembly.

use gest_models::{layout, FACE_LEN, HAND_LEN};

/// The fixed-length numeric encoding of one frame across all parts, in
/// `[pose, face, left hand, right hand]` order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameVector(Vec<f32>);

impl FrameVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

/// Concatenates the four part vectors into a [`FrameVector`].
///
/// Part lengths are guaranteed by the encoder, so a mismatch here is a
/// programming defect: it trips debug assertions rather than producing a
/// recoverable error.
#[derive(Debug, Clone, Copy)]
pub struct FrameAssembler {
    include_visibility: bool,
}

impl FrameAssembler {
    pub fn new(include_visibility: bool) -> Self {
        Self { include_visibility }
    }

    /// Total frame vector length this assembler produces.
    pub fn frame_len(&self) -> usize {
        layout::frame_len(self.include_visibility)
    }

    /// Concatenate part vectors in fixed `[pose, face, left, right]` order.
    pub fn assemble(
        &self,
        pose: Vec<f32>,
        face: Vec<f32>,
        left_hand: Vec<f32>,
        right_hand: Vec<f32>,
    ) -> FrameVector {
        debug_assert_eq!(
            pose.len(),
            layout::pose_len(self.include_visibility),
            "pose part length"
        );
        debug_assert_eq!(face.len(), FACE_LEN, "face part length");
        debug_assert_eq!(left_hand.len(), HAND_LEN, "left hand part length");
        debug_assert_eq!(right_hand.len(), HAND_LEN, "right hand part length");

        let mut values = Vec::with_capacity(self.frame_len());
        values.extend(pose);
        values.extend(face);
        values.extend(left_hand);
        values.extend(right_hand);

        debug_assert_eq!(values.len(), self.frame_len(), "assembled frame length");
        FrameVector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gest_models::FRAME_LEN;

    #[test]
    fn test_assemble_produces_exact_frame_length() {
        let assembler = FrameAssembler::new(true);
        let frame = assembler.assemble(
            vec![0.0; 132],
            vec![0.0; 1404],
            vec![0.0; 63],
            vec![0.0; 63],
        );
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(frame.len(), 1662);
    }

    #[test]
    fn test_assemble_without_visibility() {
        let assembler = FrameAssembler::new(false);
        let frame = assembler.assemble(
            vec![0.0; 99],
            vec![0.0; 1404],
            vec![0.0; 63],
            vec![0.0; 63],
        );
        assert_eq!(frame.len(), 1629);
    }

    #[test]
    fn test_part_order_is_preserved() {
        let assembler = FrameAssembler::new(true);
        let frame = assembler.assemble(
            vec![1.0; 132],
            vec![2.0; 1404],
            vec![3.0; 63],
            vec![4.0; 63],
        );
        let values = frame.as_slice();
        assert!(values[..132].iter().all(|&v| v == 1.0));
        assert!(values[132..1536].iter().all(|&v| v == 2.0));
        assert!(values[1536..1599].iter().all(|&v| v == 3.0));
        assert!(values[1599..].iter().all(|&v| v == 4.0));
    }

    #[test]
    #[should_panic(expected = "face part length")]
    #[cfg(debug_assertions)]
    fn test_part_length_mismatch_panics_in_debug() {
        let assembler = FrameAssembler::new(true);
        assembler.assemble(vec![0.0; 132], vec![0.0; 10], vec![0.0; 63], vec![0.0; 63]);
    }
}

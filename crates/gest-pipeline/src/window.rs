//! Bounded sliding window of frame vectors.

use std::collections::VecDeque;

use crate::frame::FrameVector;

/// A bounded FIFO of frame feature vectors.
///
/// Pushing past capacity evicts from the front, so the buffer always holds
/// the most recent `capacity` frames in insertion order. There is no
/// explicit clear: once full, the buffer stays full for the lifetime of the
/// capture session and turns over one frame at a time.
#[derive(Debug, Clone)]
pub struct SlidingWindowBuffer {
    frames: VecDeque<FrameVector>,
    capacity: usize,
}

impl SlidingWindowBuffer {
    /// Create a buffer holding at most `capacity` frames (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a frame, evicting from the front if over capacity.
    pub fn push(&mut self, frame: FrameVector) {
        self.frames.push_back(frame);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    /// True iff the buffer holds exactly `capacity` frames.
    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Owned copy of the current contents, oldest first.
    ///
    /// The copy is detached from the live buffer: callers may hold and
    /// transmit it while new frames keep arriving.
    pub fn snapshot(&self) -> Vec<FrameVector> {
        self.frames.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameAssembler;

    fn frame(fill: f32) -> FrameVector {
        FrameAssembler::new(true).assemble(
            vec![fill; 132],
            vec![fill; 1404],
            vec![fill; 63],
            vec![fill; 63],
        )
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut buffer = SlidingWindowBuffer::new(30);
        for i in 0..30 {
            assert!(!buffer.is_full());
            buffer.push(frame(i as f32));
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 30);
    }

    #[test]
    fn test_eviction_keeps_last_capacity_frames_in_order() {
        let mut buffer = SlidingWindowBuffer::new(30);
        for i in 0..35 {
            buffer.push(frame(i as f32));
        }
        assert_eq!(buffer.len(), 30);

        let snapshot = buffer.snapshot();
        assert_eq!(snapshot.len(), 30);
        // Oldest surviving frame is #5, newest is #34.
        assert_eq!(snapshot[0].as_slice()[0], 5.0);
        assert_eq!(snapshot[29].as_slice()[0], 34.0);
        for (i, f) in snapshot.iter().enumerate() {
            assert_eq!(f.as_slice()[0], (i + 5) as f32);
        }
    }

    #[test]
    fn test_snapshot_is_detached_from_later_pushes() {
        let mut buffer = SlidingWindowBuffer::new(3);
        for i in 0..3 {
            buffer.push(frame(i as f32));
        }
        let snapshot = buffer.snapshot();

        buffer.push(frame(99.0));
        buffer.push(frame(100.0));

        assert_eq!(snapshot[0].as_slice()[0], 0.0);
        assert_eq!(snapshot[2].as_slice()[0], 2.0);
        // Live buffer moved on.
        assert_eq!(buffer.snapshot()[2].as_slice()[0], 100.0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let buffer = SlidingWindowBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
    }
}

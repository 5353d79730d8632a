//! Observation sources.
//!
//! The pose-estimation model is an external collaborator: the runtime only
//! consumes its per-frame output. [`JsonLinesSource`] reads NDJSON
//! observations from any buffered reader (an estimator process piped into
//! stdin in practice); [`SyntheticSource`] scripts an oscillating hand for
//! smoke runs without an estimator attached.

use std::io::{self, BufRead, BufReader};

use tracing::warn;

use gest_models::{LandmarkObservation, LandmarkPoint, HAND_POINTS, POSE_POINTS};

/// Produces one landmark observation per captured frame, in capture order.
/// Returns `None` when the stream ends.
pub trait ObservationSource: Send {
    fn next_observation(&mut self) -> Option<LandmarkObservation>;
}

/// NDJSON observation reader: one JSON-encoded observation per line.
///
/// A line that fails to parse is logged and mapped to an empty observation
/// rather than surfaced as an error; shape anomalies are the pipeline's
/// normal input, not failures. A blank line is skipped outright.
pub struct JsonLinesSource<R> {
    reader: R,
    line: String,
}

impl JsonLinesSource<BufReader<io::Stdin>> {
    /// Read observations from stdin.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead + Send> ObservationSource for JsonLinesSource<R> {
    fn next_observation(&mut self) -> Option<LandmarkObservation> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = self.line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str(line) {
                        Ok(observation) => return Some(observation),
                        Err(e) => {
                            warn!("Malformed observation line: {}", e);
                            return Some(LandmarkObservation::empty());
                        }
                    }
                }
                Err(e) => {
                    warn!("Observation stream read error: {}", e);
                    return None;
                }
            }
        }
    }
}

/// Scripted source: a pose is always present, and a left hand sweeps in and
/// out of frame in ten-frame bursts so the skip policy sees both branches.
pub struct SyntheticSource {
    remaining: u64,
    frame: u64,
}

impl SyntheticSource {
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            frame: 0,
        }
    }

    fn hand_visible(frame: u64) -> bool {
        (frame / 10) % 2 == 0
    }
}

impl ObservationSource for SyntheticSource {
    fn next_observation(&mut self) -> Option<LandmarkObservation> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let frame = self.frame;
        self.frame += 1;

        let drift = (frame as f32 * 0.1).sin() * 0.3;
        let pose = (0..POSE_POINTS)
            .map(|i| {
                LandmarkPoint::with_visibility(0.5 + drift, 0.1 + i as f32 * 0.02, 0.0, 0.95)
            })
            .collect();

        let left_hand = Self::hand_visible(frame).then(|| {
            (0..HAND_POINTS)
                .map(|i| LandmarkPoint::new(0.4 + drift, 0.5 + i as f32 * 0.01, -0.02))
                .collect()
        });

        Some(LandmarkObservation {
            pose: Some(pose),
            left_hand,
            ..Default::default()
        })
    }
}

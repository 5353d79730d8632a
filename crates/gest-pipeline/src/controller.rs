//! Per-observation pipeline orchestration.
//!
//! The controller is driven synchronously from the capture loop, one
//! landmark observation at a time. For each observation it applies the skip
//! policy, encodes and assembles accepted frames, maintains the sliding
//! window, and hands full-window snapshots to the [`WindowSink`] boundary.
//! The render sink is invoked exactly once per observation regardless of
//! which branch is taken, so the raw feed keeps drawing whether or not
//! inference is active.

use tracing::{debug, info};

use gest_models::LandmarkObservation;

use crate::config::{DispatchCadence, PipelineConfig};
use crate::encoder::LandmarkEncoder;
use crate::error::{PipelineError, PipelineResult};
use crate::frame::{FrameAssembler, FrameVector};
use crate::skip::SkipPolicy;
use crate::window::SlidingWindowBuffer;

/// Receives full-window snapshots for transmission to the inference
/// service.
///
/// Implementations must not block the capture loop: the controller issues
/// the hand-off and immediately moves on to the next observation. The sink
/// owns its own lifecycle (queueing, timeouts, failure reporting); nothing
/// flows back into pipeline state.
pub trait WindowSink: Send {
    fn send_window(&self, window: Vec<FrameVector>);
}

/// Receives one draw command per observation.
pub trait RenderSink: Send {
    fn draw_frame(&mut self);
}

/// What the controller did with one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Pipeline disabled: rendered only.
    Disabled,
    /// Skip policy excluded the frame: rendered only.
    Skipped,
    /// Frame encoded and pushed; `dispatched` is true if a full window was
    /// handed to the sink.
    Accepted { dispatched: bool },
}

impl std::fmt::Display for FrameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameOutcome::Disabled => write!(f, "disabled"),
            FrameOutcome::Skipped => write!(f, "skipped"),
            FrameOutcome::Accepted { dispatched: true } => write!(f, "accepted+dispatched"),
            FrameOutcome::Accepted { dispatched: false } => write!(f, "accepted"),
        }
    }
}

/// Counters for monitoring pipeline behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerStats {
    /// Total observations seen (including while disabled)
    pub observed: u64,
    /// Observations excluded by the skip policy
    pub skipped: u64,
    /// Frames encoded and pushed into the window
    pub accepted: u64,
    /// Full-window hand-offs to the sink
    pub dispatched: u64,
}

impl ControllerStats {
    /// Fraction of enabled observations the skip policy excluded.
    pub fn skip_ratio(&self) -> f64 {
        let considered = self.skipped + self.accepted;
        if considered > 0 {
            self.skipped as f64 / considered as f64
        } else {
            0.0
        }
    }
}

/// Orchestrates encode, window, and dispatch per incoming observation.
///
/// Owns the window buffer exclusively; no other component mutates it. The
/// enable switch can be flipped between any two observations and never
/// clears the buffer: disabling only suspends new pushes and dispatch, and
/// re-enabling resumes with the prior window contents intact.
pub struct PipelineController {
    config: PipelineConfig,
    encoder: LandmarkEncoder,
    assembler: FrameAssembler,
    skip_policy: Box<dyn SkipPolicy>,
    window: SlidingWindowBuffer,
    sink: Box<dyn WindowSink>,
    render: Box<dyn RenderSink>,
    enabled: bool,
    accepted_since_dispatch: usize,
    stats: ControllerStats,
}

impl PipelineController {
    pub fn new(
        config: PipelineConfig,
        skip_policy: Box<dyn SkipPolicy>,
        sink: Box<dyn WindowSink>,
        render: Box<dyn RenderSink>,
    ) -> PipelineResult<Self> {
        if config.window_size == 0 {
            return Err(PipelineError::invalid_config("window_size must be >= 1"));
        }

        Ok(Self {
            encoder: LandmarkEncoder::new(config.include_visibility),
            assembler: FrameAssembler::new(config.include_visibility),
            skip_policy,
            window: SlidingWindowBuffer::new(config.window_size),
            sink,
            render,
            enabled: config.start_enabled,
            accepted_since_dispatch: 0,
            stats: ControllerStats::default(),
            config,
        })
    }

    /// Process one observation and report what was done with it.
    pub fn observe(&mut self, observation: &LandmarkObservation) -> FrameOutcome {
        self.stats.observed += 1;

        if !self.enabled {
            self.render.draw_frame();
            return FrameOutcome::Disabled;
        }

        if self.skip_policy.should_skip(observation) {
            debug!("no informative landmarks detected, skipping frame");
            self.stats.skipped += 1;
            self.render.draw_frame();
            return FrameOutcome::Skipped;
        }

        let frame = self.encode_frame(observation);
        self.window.push(frame);
        self.stats.accepted += 1;
        self.accepted_since_dispatch += 1;

        let mut dispatched = false;
        if self.window.is_full() && self.cadence_allows_dispatch() {
            self.sink.send_window(self.window.snapshot());
            self.stats.dispatched += 1;
            self.accepted_since_dispatch = 0;
            dispatched = true;
            debug!(
                window_len = self.window.len(),
                total_dispatched = self.stats.dispatched,
                "window handed to dispatch"
            );
        }

        self.render.draw_frame();
        FrameOutcome::Accepted { dispatched }
    }

    /// Flip the enable switch. The window buffer is preserved either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            info!(enabled, window_len = self.window.len(), "pipeline toggled");
        }
        self.enabled = enabled;
    }

    /// Toggle and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn window(&self) -> &SlidingWindowBuffer {
        &self.window
    }

    pub fn stats(&self) -> &ControllerStats {
        &self.stats
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn encode_frame(&self, observation: &LandmarkObservation) -> FrameVector {
        let pose = self.encoder.encode_pose(observation.pose.as_deref());
        let face = self.encoder.encode_face(observation.face.as_deref());
        let left_hand = self.encoder.encode_hand(observation.left_hand.as_deref());
        let right_hand = self.encoder.encode_hand(observation.right_hand.as_deref());
        self.assembler.assemble(pose, face, left_hand, right_hand)
    }

    fn cadence_allows_dispatch(&self) -> bool {
        match self.config.dispatch_cadence {
            DispatchCadence::EveryFullFrame => true,
            DispatchCadence::PerRefill => {
                self.accepted_since_dispatch >= self.config.window_size
            }
        }
    }
}

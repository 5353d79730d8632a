//! Frame-to-feature normalization and temporal windowing.
//!
//! This crate turns raw landmark observations into fixed-length feature
//! vectors, maintains a bounded sliding window of them, and decides when a
//! full window should be handed off for inference:
//!
//! - [`LandmarkEncoder`] flattens one part's landmarks into an exact-length
//!   vector, zero-filling missing parts and truncating overlong ones
//! - [`FrameAssembler`] concatenates the four part vectors in fixed order
//! - [`SkipPolicy`] excludes uninformative frames from the window
//! - [`SlidingWindowBuffer`] is the bounded FIFO of frame vectors
//! - [`PipelineController`] orchestrates the above per observation and owns
//!   the enable/disable switch
//!
//! The crate is synchronous and runtime-free: the controller is driven from
//! a capture loop one observation at a time, and the only asynchronous
//! operation (the outbound inference call) sits behind the [`WindowSink`]
//! boundary, which must not block.

pub mod config;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod skip;
pub mod window;

pub use config::{DispatchCadence, PipelineConfig};
pub use controller::{
    ControllerStats, FrameOutcome, PipelineController, RenderSink, WindowSink,
};
pub use encoder::{flatten_landmarks, LandmarkEncoder};
pub use error::{PipelineError, PipelineResult};
pub use frame::{FrameAssembler, FrameVector};
pub use skip::{AcceptAll, HandPresence, SkipPolicy};
pub use window::SlidingWindowBuffer;

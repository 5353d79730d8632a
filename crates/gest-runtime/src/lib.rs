//! Capture-session runtime.
//!
//! Wires the synchronous pipeline core to its asynchronous collaborators:
//! an observation source feeding the capture loop, a watch-channel toggle
//! for the enable switch, and a fire-and-forget dispatch task that owns the
//! inference client and drains full-window snapshots from a bounded queue.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod session;
pub mod source;

pub use config::{RuntimeConfig, SourceKind};
pub use dispatch::{ChannelWindowSink, DispatchTask};
pub use error::{RuntimeError, RuntimeResult};
pub use session::{CaptureSession, CountingRenderSink};
pub use source::{JsonLinesSource, ObservationSource, SyntheticSource};

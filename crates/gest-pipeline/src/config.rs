//! Pipeline configuration.

/// Cadence for handing full windows to the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchCadence {
    /// Dispatch on every accepted frame once the window is full. This is the
    /// observed steady-state behavior of the reference frontend: once the
    /// buffer reaches capacity, every new accepted frame re-sends the
    /// current 30-frame window.
    #[default]
    EveryFullFrame,
    /// Dispatch once per `window_size` accepted frames: the window fills,
    /// one send fires, and the next fires only after an entire window's
    /// worth of new frames has been accepted.
    PerRefill,
}

impl std::fmt::Display for DispatchCadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchCadence::EveryFullFrame => write!(f, "every_full_frame"),
            DispatchCadence::PerRefill => write!(f, "per_refill"),
        }
    }
}

impl std::str::FromStr for DispatchCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "every_full_frame" | "every-full-frame" => Ok(Self::EveryFullFrame),
            "per_refill" | "per-refill" => Ok(Self::PerRefill),
            other => Err(format!("unknown dispatch cadence: {other}")),
        }
    }
}

/// Configuration for the pipeline controller.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Temporal window capacity in frames
    pub window_size: usize,
    /// Encode pose points as (x, y, z, visibility) instead of (x, y, z)
    pub include_visibility: bool,
    /// Whether the pipeline starts enabled
    pub start_enabled: bool,
    /// When to hand full windows to the dispatch boundary
    pub dispatch_cadence: DispatchCadence,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: 30,
            include_visibility: true,
            start_enabled: true,
            dispatch_cadence: DispatchCadence::default(),
        }
    }
}

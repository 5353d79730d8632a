//! Runtime configuration.

use gest_ml_client::InferClientConfig;
use gest_pipeline::PipelineConfig;

/// Where the runtime pulls landmark observations from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// NDJSON observations on stdin, one per line (pipe an external
    /// estimator in)
    #[default]
    Stdin,
    /// Scripted oscillating-hand source for smoke runs
    Synthetic,
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdin" => Ok(Self::Stdin),
            "synthetic" => Ok(Self::Synthetic),
            other => Err(format!("unknown observation source: {other}")),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pipeline core settings (window size, visibility encoding, cadence)
    pub pipeline: PipelineConfig,
    /// Inference service client settings
    pub infer: InferClientConfig,
    /// Observation source
    pub source: SourceKind,
    /// Frame count for the synthetic source
    pub synthetic_frames: u64,
    /// Capacity of the dispatch queue; full windows arriving while the
    /// queue is full are dropped
    pub dispatch_queue_capacity: usize,
    /// Log pipeline stats every N observations
    pub stats_log_interval: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            infer: InferClientConfig::default(),
            source: SourceKind::default(),
            synthetic_frames: 120,
            dispatch_queue_capacity: 8,
            stats_log_interval: 300,
        }
    }
}

impl RuntimeConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let pipeline = PipelineConfig {
            window_size: std::env::var("GEST_WINDOW_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            include_visibility: std::env::var("GEST_INCLUDE_VISIBILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            start_enabled: std::env::var("GEST_START_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            dispatch_cadence: std::env::var("GEST_DISPATCH_CADENCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        };

        Self {
            pipeline,
            infer: InferClientConfig::from_env(),
            source: std::env::var("GEST_SOURCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            synthetic_frames: std::env::var("GEST_SYNTHETIC_FRAMES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            dispatch_queue_capacity: std::env::var("GEST_DISPATCH_QUEUE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8),
            stats_log_interval: std::env::var("GEST_STATS_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
        }
    }
}

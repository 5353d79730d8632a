//! Capture session loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use gest_pipeline::{ControllerStats, PipelineController, RenderSink};

use crate::source::ObservationSource;

/// Render-sink stand-in: presentation is an external concern, so the
/// runtime only counts draw commands to keep the once-per-observation
/// contract observable.
#[derive(Clone, Default)]
pub struct CountingRenderSink {
    drawn: Arc<AtomicU64>,
}

impl CountingRenderSink {
    pub fn handle(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.drawn)
    }
}

impl RenderSink for CountingRenderSink {
    fn draw_frame(&mut self) {
        self.drawn.fetch_add(1, Ordering::Relaxed);
    }
}

/// Synchronous capture loop: pulls observations from the source and feeds
/// the controller one at a time.
///
/// The enable toggle is a watch channel settable from anywhere (a UI, a
/// control socket); its current value is applied to the controller before
/// every observation. Dropping the session closes the controller's dispatch
/// sink, which lets the dispatch task drain and exit.
pub struct CaptureSession<S> {
    controller: PipelineController,
    source: S,
    toggle: watch::Receiver<bool>,
    stats_log_interval: u64,
}

impl<S: ObservationSource> CaptureSession<S> {
    pub fn new(
        controller: PipelineController,
        source: S,
        toggle: watch::Receiver<bool>,
        stats_log_interval: u64,
    ) -> Self {
        Self {
            controller,
            source,
            toggle,
            stats_log_interval: stats_log_interval.max(1),
        }
    }

    /// Run until the observation source is exhausted; returns final stats.
    pub fn run(mut self) -> ControllerStats {
        info!(
            window_size = self.controller.config().window_size,
            enabled = self.controller.is_enabled(),
            "Capture session started"
        );

        while let Some(observation) = self.source.next_observation() {
            let enabled = *self.toggle.borrow();
            self.controller.set_enabled(enabled);

            let outcome = self.controller.observe(&observation);
            debug!(%outcome, "Frame processed");

            if self.controller.stats().observed % self.stats_log_interval == 0 {
                let stats = self.controller.stats();
                info!(
                    observed = stats.observed,
                    accepted = stats.accepted,
                    skipped = stats.skipped,
                    dispatched = stats.dispatched,
                    window_len = self.controller.window().len(),
                    "Pipeline stats"
                );
            }
        }

        let stats = *self.controller.stats();
        info!(
            observed = stats.observed,
            accepted = stats.accepted,
            skipped = stats.skipped,
            dispatched = stats.dispatched,
            "Capture session finished"
        );
        stats
    }
}

//! Fire-and-forget window dispatch.
//!
//! The controller hands full-window snapshots to a [`ChannelWindowSink`];
//! a [`DispatchTask`] on the async runtime drains them and performs the
//! outbound inference calls. The channel is bounded and lossy toward the
//! pipeline: a slow or unreachable service can never exert backpressure on
//! the capture loop, and disabling the pipeline does not cancel sends
//! already queued.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

use gest_ml_client::{InferClient, PredictRequest};
use gest_pipeline::{FrameVector, WindowSink};

/// Controller-side handle to the dispatch queue.
#[derive(Clone)]
pub struct ChannelWindowSink {
    tx: mpsc::Sender<Vec<FrameVector>>,
}

impl WindowSink for ChannelWindowSink {
    fn send_window(&self, window: Vec<FrameVector>) {
        match self.tx.try_send(window) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("Dispatch queue full, dropping window");
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Dispatch task stopped, dropping window");
            }
        }
    }
}

/// Async task owning the inference client and the receive side of the
/// dispatch queue.
///
/// Runs until every sink handle is dropped, then drains remaining windows
/// and exits. Responses are logged and otherwise discarded; failures never
/// alter pipeline state.
pub struct DispatchTask {
    client: InferClient,
    rx: mpsc::Receiver<Vec<FrameVector>>,
}

impl DispatchTask {
    /// Create a sink/task pair connected by a bounded queue.
    pub fn channel(client: InferClient, capacity: usize) -> (ChannelWindowSink, Self) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (ChannelWindowSink { tx }, Self { client, rx })
    }

    /// Drain the queue, sending each window to the inference service.
    pub async fn run(mut self) {
        while let Some(window) = self.rx.recv().await {
            let request = PredictRequest::from_window(&window);
            match self.client.predict(&request).await {
                Ok(response) => {
                    info!(
                        prediction = response.prediction.as_deref().unwrap_or("<none>"),
                        confidence = response.confidence,
                        "Prediction received"
                    );
                }
                Err(e) => {
                    warn!("Inference dispatch failed: {}", e);
                }
            }
        }
        debug!("Dispatch queue closed, task exiting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gest_ml_client::InferClientConfig;
    use gest_pipeline::FrameAssembler;
    use std::time::Duration;

    fn test_window() -> Vec<FrameVector> {
        let assembler = FrameAssembler::new(true);
        vec![assembler.assemble(
            vec![0.0; 132],
            vec![0.0; 1404],
            vec![0.0; 63],
            vec![0.0; 63],
        )]
    }

    #[tokio::test]
    async fn test_sink_drops_when_queue_full() {
        let client = InferClient::new(InferClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(100),
        })
        .unwrap();
        // Task never started, so nothing drains the queue.
        let (sink, _task) = DispatchTask::channel(client, 1);

        sink.send_window(test_window());
        // Second send hits a full queue; it is dropped, not blocked on.
        sink.send_window(test_window());
    }

    #[tokio::test]
    async fn test_task_exits_when_sinks_dropped() {
        let client = InferClient::new(InferClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(100),
        })
        .unwrap();
        let (sink, task) = DispatchTask::channel(client, 4);

        let handle = tokio::spawn(task.run());
        drop(sink);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("dispatch task should exit once all sinks are dropped")
            .unwrap();
    }
}

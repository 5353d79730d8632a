//! Gesture pipeline runtime binary.

use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gest_ml_client::InferClient;
use gest_pipeline::{HandPresence, PipelineController};
use gest_runtime::{
    CaptureSession, CountingRenderSink, DispatchTask, JsonLinesSource, RuntimeConfig, SourceKind,
    SyntheticSource,
};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("gest=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting gest-runtime");

    // Load configuration
    let config = RuntimeConfig::from_env();
    info!("Runtime config: {:?}", config);

    // Create inference client
    let client = match InferClient::new(config.infer.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create inference client: {}", e);
            std::process::exit(1);
        }
    };

    if !client.health_check().await.unwrap_or(false) {
        warn!(
            "Inference service at {} is not healthy; windows will fail to dispatch until it recovers",
            client.base_url()
        );
    }

    // Dispatch task owns the client and the receive side of the queue
    let (sink, dispatch_task) = DispatchTask::channel(client, config.dispatch_queue_capacity);
    let dispatch_handle = tokio::spawn(dispatch_task.run());

    // Enable toggle, settable externally for the session's lifetime
    let (toggle_tx, toggle_rx) = tokio::sync::watch::channel(config.pipeline.start_enabled);

    let controller = match PipelineController::new(
        config.pipeline.clone(),
        Box::new(HandPresence),
        Box::new(sink),
        Box::new(CountingRenderSink::default()),
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create pipeline controller: {}", e);
            std::process::exit(1);
        }
    };

    // The capture loop is synchronous; run it off the async runtime
    let stats_interval = config.stats_log_interval;
    let session_handle = match config.source {
        SourceKind::Stdin => tokio::task::spawn_blocking(move || {
            CaptureSession::new(controller, JsonLinesSource::stdin(), toggle_rx, stats_interval)
                .run()
        }),
        SourceKind::Synthetic => {
            let frames = config.synthetic_frames;
            tokio::task::spawn_blocking(move || {
                CaptureSession::new(
                    controller,
                    SyntheticSource::new(frames),
                    toggle_rx,
                    stats_interval,
                )
                .run()
            })
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
            std::process::exit(0);
        }
        result = session_handle => {
            match result {
                Ok(stats) => info!(
                    observed = stats.observed,
                    dispatched = stats.dispatched,
                    "Observation source exhausted"
                ),
                Err(e) => error!("Capture session panicked: {}", e),
            }
        }
    }

    drop(toggle_tx);

    // The session owned the only sink; give the dispatch task a moment to
    // drain queued windows before exiting.
    if tokio::time::timeout(Duration::from_secs(10), dispatch_handle)
        .await
        .is_err()
    {
        warn!("Dispatch task did not drain in time");
    }

    info!("Runtime shutdown complete");
}

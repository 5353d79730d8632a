//! Inference service HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{InferError, InferResult};
use crate::types::{HealthResponse, PredictRequest, PredictResponse};

/// Configuration for the inference client.
#[derive(Debug, Clone)]
pub struct InferClientConfig {
    /// Base URL of the inference service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for InferClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl InferClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("INFER_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("INFER_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Client for the Python gesture inference service.
///
/// Each full-window event independently attempts exactly one send: there is
/// no retry and no backpressure toward the pipeline. Failures are surfaced
/// as typed errors for the caller to log.
pub struct InferClient {
    http: Client,
    config: InferClientConfig,
}

impl InferClient {
    /// Create a new inference client.
    pub fn new(config: InferClientConfig) -> InferResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(InferError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> InferResult<Self> {
        Self::new(InferClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Check if the inference service is healthy.
    pub async fn health_check(&self) -> InferResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Inference service health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Inference service health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Classify one temporal window of keypoint vectors.
    pub async fn predict(&self, request: &PredictRequest) -> InferResult<PredictResponse> {
        let url = format!("{}/predict", self.config.base_url);

        debug!(
            window_len = request.window_len(),
            "Sending prediction request to {}", url
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(InferError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferError::request_failed(format!(
                "Inference service returned {}: {}",
                status, body
            )));
        }

        let prediction: PredictResponse = response.json().await?;
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_config_defaults() {
        let config = InferClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    fn client_for(server: &MockServer) -> InferClient {
        InferClient::new(InferClientConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    fn request() -> PredictRequest {
        PredictRequest {
            keypoint: vec![vec![0.0; 1662]; 30],
        }
    }

    #[tokio::test]
    async fn test_predict_parses_prediction() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "prediction": "thanks",
                "confidence": 0.87,
            })))
            .mount(&server)
            .await;

        let response = client_for(&server).predict(&request()).await.unwrap();
        assert_eq!(response.prediction.as_deref(), Some("thanks"));
    }

    #[tokio::test]
    async fn test_predict_sends_keypoint_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .and(body_partial_json(serde_json::json!({
                "keypoint": [],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .predict(&PredictRequest { keypoint: vec![] })
            .await
            .unwrap();
        assert!(response.prediction.is_none());
    }

    #[tokio::test]
    async fn test_predict_non_success_maps_to_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).predict(&request()).await.unwrap_err();
        assert!(matches!(err, InferError::RequestFailed(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_health_check_tolerates_unreachable_service() {
        let client = InferClient::new(InferClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
        })
        .unwrap();

        assert!(!client.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_health_check_healthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "version": "1.2.0",
            })))
            .mount(&server)
            .await;

        assert!(client_for(&server).health_check().await.unwrap());
    }
}

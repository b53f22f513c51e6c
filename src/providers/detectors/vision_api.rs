use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::models::LabelCandidate;
use crate::providers::traits::LabelDetector;

/// Connection settings for the remote label-detection endpoint.
#[derive(Debug, Clone)]
pub struct VisionApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub max_labels: usize,
    pub timeout_secs: u64,
}

impl Default for VisionApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: None,
            max_labels: 10,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    labels: Vec<LabelEntry>,
}

#[derive(Debug, Deserialize)]
struct LabelEntry {
    label: String,
    score: f32,
}

/// Thin client for an external label-detection API. The image is shipped as
/// base64 and the response is a ranked `(label, score)` list. Requests are
/// never retried; a failed call surfaces as a detector error the pipeline
/// absorbs.
pub struct VisionApiDetector {
    client: Client,
    config: VisionApiConfig,
}

impl VisionApiDetector {
    pub fn new(config: VisionApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_request_body(&self, image: &[u8]) -> serde_json::Value {
        json!({
            "image": BASE64.encode(image),
            "max_labels": self.config.max_labels,
        })
    }
}

#[async_trait]
impl LabelDetector for VisionApiDetector {
    fn name(&self) -> &str {
        "Vision API Detector"
    }

    fn provider_type(&self) -> &str {
        "vision"
    }

    fn description(&self) -> &str {
        "Delegates label detection to a remote vision endpoint"
    }

    async fn detect(
        &self,
        image: &[u8],
    ) -> Result<Vec<LabelCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs))
            .json(&self.build_request_body(image));

        if let Some(api_key) = &self.config.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("label endpoint returned {}", status).into());
        }

        let parsed: LabelResponse = response.json().await?;
        debug!(labels = parsed.labels.len(), "vision endpoint responded");

        Ok(parsed
            .labels
            .into_iter()
            .map(|entry| LabelCandidate::new(entry.label, entry.score))
            .collect())
    }
}

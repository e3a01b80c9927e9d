//! # Detection Service Client
//!
//! One-shot proxy call to the external AI detection service. The audio
//! buffer goes out as a single multipart file field and the caller is
//! suspended until the upstream answers; there is no timeout, retry, or
//! cancellation path. Upstream HTTP failures and transport failures both
//! collapse into `AppError::DetectionService`.

use tracing::debug;

use crate::error::{AppError, AppResult};

use super::types::UpstreamDetection;

const DETECT_PATH: &str = "/api/v1/detection/detect";

pub struct DetectionClient {
    base_url: String,
    client: reqwest::Client,
}

impl DetectionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            // Default client: no timeout is configured, the detection call
            // blocks for as long as the upstream takes.
            client: reqwest::Client::new(),
        }
    }

    /// Send one audio buffer for analysis and return the decoded reply.
    pub async fn detect(&self, audio: Vec<u8>, filename: &str) -> AppResult<UpstreamDetection> {
        let url = format!("{}{}", self.base_url, DETECT_PATH);
        debug!(
            url = %url,
            filename = %filename,
            size_bytes = audio.len(),
            "Forwarding audio to detection service"
        );

        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("audio/wav")
            .map_err(|e| AppError::Internal(format!("Invalid multipart content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::DetectionService(format!("Detection service request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DetectionService(format!(
                "Detection service returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            )));
        }

        response.json::<UpstreamDetection>().await.map_err(|e| {
            AppError::DetectionService(format!("Malformed detection service response: {}", e))
        })
    }
}

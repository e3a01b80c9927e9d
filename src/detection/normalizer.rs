//! # Response Normalization
//!
//! Maps the AI service's loosely-typed reply onto the fixed detection
//! contract. The upstream has shipped two naming conventions, so every
//! field is resolved by precedence with a documented default:
//!
//! - `detection_type` ← `type`, then `detection_type`, mapped
//!   case-insensitively; anything unrecognized (or absent) is `INFO`
//! - `detection_result` ← `data.details`, passed through opaquely
//! - `detection_message` ← `message`, then `detection_message`, then
//!   `"Detection completed"`
//! - `confidence` ← `data.confidence`, then `confidence_score`, then `0`
//! - `time_processed` ← the normalization instant, never upstream time
//!
//! A missing `data` container degrades to the defaults like any other
//! absent field.

use chrono::Utc;

use super::types::{DetectionResponse, DetectionType, UpstreamDetection};

const DEFAULT_MESSAGE: &str = "Detection completed";

/// Produce the stable detection contract from an upstream reply.
pub fn normalize(upstream: UpstreamDetection) -> DetectionResponse {
    let (details, nested_confidence) = match upstream.data {
        Some(data) => (data.details, data.confidence),
        None => (None, None),
    };

    DetectionResponse {
        detection_type: upstream
            .kind
            .or(upstream.detection_type)
            .map(|t| map_detection_type(&t))
            .unwrap_or(DetectionType::Info),
        detection_result: details,
        detection_message: upstream
            .message
            .or(upstream.detection_message)
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        confidence: nested_confidence
            .or(upstream.confidence_score)
            .unwrap_or(0.0),
        time_processed: Utc::now(),
    }
}

fn map_detection_type(raw: &str) -> DetectionType {
    match raw.to_lowercase().as_str() {
        "warning" | "warn" => DetectionType::Warning,
        "danger" | "critical" => DetectionType::Danger,
        _ => DetectionType::Info,
    }
}

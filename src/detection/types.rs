//! Detection wire types: the loosely-typed upstream reply and the fixed
//! contract this service returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity classes reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DetectionType {
    Info,
    Warning,
    Danger,
}

/// Decoded body of the AI service's reply.
///
/// Every field is optional: the upstream has used two naming conventions
/// (`type`/`message` vs `detection_type`/`detection_message`, nested
/// `data.confidence` vs top-level `confidence_score`), and a missing
/// nested container must degrade to defaults instead of failing the
/// request. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamDetection {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub detection_type: Option<String>,
    pub message: Option<String>,
    pub detection_message: Option<String>,
    pub data: Option<UpstreamDetectionData>,
    pub confidence_score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamDetectionData {
    pub details: Option<serde_json::Value>,
    pub confidence: Option<f64>,
}

/// Normalized detection result. Produced fresh per request; never stored.
#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    pub detection_type: DetectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_result: Option<serde_json::Value>,
    pub detection_message: String,
    pub confidence: f64,
    pub time_processed: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&DetectionType::Warning).unwrap(),
            "\"WARNING\""
        );
    }

    #[test]
    fn test_upstream_decodes_with_everything_missing() {
        let upstream: UpstreamDetection = serde_json::from_str("{}").unwrap();
        assert!(upstream.kind.is_none());
        assert!(upstream.data.is_none());
    }

    #[test]
    fn test_upstream_ignores_unknown_fields() {
        let body = r#"{"success": true, "type": "warning", "extra": [1, 2]}"#;
        let upstream: UpstreamDetection = serde_json::from_str(body).unwrap();
        assert_eq!(upstream.kind.as_deref(), Some("warning"));
    }
}

//! # Audio Detection Handler
//!
//! Intake for the detection pipeline: validate the uploaded file, forward
//! it to the AI detection service, normalize the reply.
//!
//! ## Endpoint: `POST /api/v1/audio-detection`
//!
//! Multipart form data with a `.wav` file in a field named "audio",
//! capped at 10 MiB.

use crate::error::AppError;
use crate::response::ApiSuccess;
use crate::state::AppState;
use crate::upload::{collect_file, require_wav, MAX_UPLOAD_BYTES};
use crate::detection::normalizer;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use tracing::info;

/// Run one uploaded audio clip through the detection service.
///
/// ## Response:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "detection_type": "DANGER",
///     "detection_result": { "db": 90 },
///     "detection_message": "loud noise",
///     "confidence": 0.92,
///     "time_processed": "2025-06-01T12:00:00Z"
///   }
/// }
/// ```
///
/// 400 when the file is missing or not a `.wav`; 500 when the upstream
/// call fails.
pub async fn detect_audio(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let file = collect_file(&mut payload, "audio", MAX_UPLOAD_BYTES)
        .await?
        .ok_or_else(|| AppError::ValidationError("No audio file uploaded".to_string()))?;

    require_wav(&file.filename)?;

    info!(
        filename = %file.filename,
        size_bytes = file.bytes.len(),
        "Processing audio detection request"
    );

    let upstream = state.detection.detect(file.bytes, &file.filename).await?;
    let result = normalizer::normalize(upstream);

    Ok(HttpResponse::Ok().json(ApiSuccess::new(result)))
}

//! # Upload Intake
//!
//! Multipart form handling shared by the detection and spreadsheet
//! endpoints: collect one named file field into memory under a size cap,
//! then validate it structurally. Extension checks look at the filename
//! suffix only; the bytes are never inspected. That is a trust boundary,
//! not a guarantee the file is well formed.

use actix_multipart::{Field, Multipart};
use futures_util::stream::StreamExt;

use crate::error::{AppError, AppResult};

/// Upload cap applied to file fields (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A file field pulled out of a multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Collect the file carried in `field_name`, if any.
///
/// Other fields in the body are drained and ignored. Returns `None` when
/// the request carried no such field, which callers turn into their own
/// missing-file message.
pub async fn collect_file(
    payload: &mut Multipart,
    field_name: &str,
    max_bytes: usize,
) -> AppResult<Option<UploadedFile>> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field: Field =
            item.map_err(|e| AppError::ValidationError(format!("Multipart error: {}", e)))?;

        let content_disposition = field
            .content_disposition()
            .ok_or_else(|| AppError::ValidationError("Missing content disposition".to_string()))?;

        let name = content_disposition
            .get_name()
            .ok_or_else(|| AppError::ValidationError("Missing field name".to_string()))?;

        if name != field_name {
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .unwrap_or("unknown")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::ValidationError(format!("Chunk error: {}", e)))?;
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::ValidationError(format!(
                    "File too large (max: {} bytes)",
                    max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        uploaded = Some(UploadedFile { filename, bytes });
    }

    Ok(uploaded)
}

/// Reject filenames whose extension is not `.wav`, case-insensitively.
pub fn require_wav(filename: &str) -> AppResult<()> {
    if filename.to_lowercase().ends_with(".wav") {
        Ok(())
    } else {
        Err(AppError::ValidationError(
            "Only .wav audio files are supported".to_string(),
        ))
    }
}

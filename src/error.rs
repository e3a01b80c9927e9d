//! # Error Handling
//!
//! Crate-wide error type and its mapping onto HTTP responses. Every handler
//! returns `Result<HttpResponse, AppError>`; actix invokes
//! [`ResponseError::error_response`] for the `Err` arm, so all failures
//! funnel through the single envelope produced here.
//!
//! ## HTTP Status Mapping:
//! - `BadRequest`/`ValidationError` → 400
//! - `NotFound` → 404
//! - `Internal`/`ConfigError`/`DetectionService` → 500
//!
//! ## Error envelope:
//! ```json
//! { "success": false, "error": "Example with id '7' not found" }
//! ```

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Application error taxonomy.
#[derive(Debug)]
pub enum AppError {
    /// Unexpected server-side failures
    Internal(String),

    /// Client sent malformed data (bad JSON body, bad CSV row)
    BadRequest(String),

    /// Requested resource doesn't exist; message carries the requested id
    NotFound(String),

    /// Configuration loading or validation problems
    ConfigError(String),

    /// Upload validation failed (missing file, wrong extension, too large)
    ValidationError(String),

    /// Upstream detection call failed. HTTP 4xx/5xx and transport errors
    /// all collapse into this one variant; the message keeps the upstream
    /// status/reason when one was received.
    DetectionService(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::DetectionService(msg) => write!(f, "Detection service error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, message) = match self {
            AppError::Internal(msg) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (actix_web::http::StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::NotFound(msg) => {
                (actix_web::http::StatusCode::NOT_FOUND, msg.clone())
            }
            AppError::ConfigError(msg) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::ValidationError(msg) => {
                (actix_web::http::StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::DetectionService(msg) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        HttpResponse::build(status).json(json!({
            "success": false,
            "error": message
        }))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON parsing error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

/// Shorthand for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;

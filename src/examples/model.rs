//! Example records and their wire-facing DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored example record.
///
/// `id` is the decimal rendering of a process-wide monotonically increasing
/// counter and never changes after creation. `created_at` is stamped once;
/// `updated_at` is refreshed on every successful mutation.
#[derive(Debug, Clone)]
pub struct Example {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Example {
    /// The externally visible subset of the record (timestamps excluded).
    pub fn to_dto(&self) -> ExampleDto {
        ExampleDto {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }
}

/// Public projection of an example record.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Request body for creating an example. Also the row shape of the
/// spreadsheet import. No validation beyond structural typing; empty
/// strings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExampleRequest {
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Partial body for `PUT /examples/{id}`. Only present fields overwrite
/// the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExampleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

//! # Example REST API Handlers
//!
//! CRUD surface for the example resource, plus spreadsheet bulk import.
//!
//! ## Available Endpoints:
//! - `GET /examples?limit=&index=` - Paginated list
//! - `POST /examples` - Create one example
//! - `POST /examples/upload` - Bulk import from a CSV file
//! - `GET /examples/{id}` - Fetch by id
//! - `PUT /examples/{id}` - Partial update
//! - `DELETE /examples/{id}` - Delete

use crate::error::AppError;
use crate::examples::{CreateExampleRequest, UpdateExampleRequest};
use crate::response::ApiSuccess;
use crate::spreadsheet;
use crate::state::AppState;
use crate::upload::{collect_file, MAX_UPLOAD_BYTES};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Query string of the list endpoint. Both parameters are optional;
/// non-numeric values are rejected by deserialization with a 400.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<usize>,
    pub index: Option<usize>,
}

/// List examples one page at a time.
///
/// ## Endpoint: `GET /api/v1/examples?limit=10&index=0`
///
/// ## Response:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "items": [{ "id": "1", "name": "...", "description": "...", "status": "..." }],
///     "index": 0,
///     "total": 42
///   }
/// }
/// ```
pub async fn get_all_examples(
    state: web::Data<AppState>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.examples.get_all(query.limit, query.index);
    Ok(HttpResponse::Ok().json(ApiSuccess::new(page)))
}

/// Create a single example.
///
/// ## Endpoint: `POST /api/v1/examples`
///
/// ## Request Body:
/// ```json
/// { "name": "pump-3", "description": "east hall", "status": "active" }
/// ```
///
/// Returns 201 with the created projection.
pub async fn create_example(
    state: web::Data<AppState>,
    body: web::Json<CreateExampleRequest>,
) -> Result<HttpResponse, AppError> {
    let created = state.examples.create(body.into_inner());
    Ok(HttpResponse::Created().json(ApiSuccess::new(created)))
}

/// Bulk-import examples from an uploaded CSV file.
///
/// ## Endpoint: `POST /api/v1/examples/upload`
///
/// Multipart form data with the spreadsheet in a field named "file"
/// (header row `name,description,status`). All rows are extracted before
/// anything is inserted, so a malformed row imports nothing.
pub async fn upload_examples(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let file = collect_file(&mut payload, "file", MAX_UPLOAD_BYTES)
        .await?
        .ok_or_else(|| AppError::ValidationError("No file uploaded".to_string()))?;

    let requests = spreadsheet::extract_examples(&file.bytes)?;
    let created = state.examples.add_range(requests);

    Ok(HttpResponse::Ok().json(ApiSuccess::new(created)))
}

/// ## Endpoint: `GET /api/v1/examples/{id}`
///
/// Returns the projection, or 404 when the id is unknown.
pub async fn get_example_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let example = state.examples.get_by_id(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiSuccess::new(example)))
}

/// Partially update an example. Absent fields keep their stored values.
///
/// ## Endpoint: `PUT /api/v1/examples/{id}`
///
/// ## Request Body:
/// ```json
/// { "status": "archived" }
/// ```
pub async fn update_example_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateExampleRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .examples
        .update_by_id(&path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiSuccess::new(updated)))
}

/// ## Endpoint: `DELETE /api/v1/examples/{id}`
///
/// Returns 204 with an empty body, or 404 when the id is unknown.
pub async fn delete_example_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.examples.delete_by_id(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

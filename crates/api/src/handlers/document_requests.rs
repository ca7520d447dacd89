//! Handlers for the `/document-requests` resource.
//!
//! Document requests are nested aggregates (request -> topics -> fields).
//! Reads return the whole tree; the repository owns validation and the
//! NotFound/Conflict distinction, so these handlers stay thin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::document_request::{CreateDocumentRequest, UpdateDocumentRequest};
use folio_db::repositories::DocumentRequestRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/document-requests
///
/// List every request with its topics and fields, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let requests = DocumentRequestRepo::list(&state.pool).await?;
    Ok(Json(requests))
}

/// GET /api/document-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = DocumentRequestRepo::get(&state.pool, id).await?;
    Ok(Json(request))
}

/// GET /api/document-requests/project/{project_id}
///
/// List the requests linked to one project, newest first.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let requests = DocumentRequestRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(requests))
}

/// POST /api/document-requests
///
/// Create a request together with its topics and their fields in one
/// transaction; returns the persisted aggregate with every generated id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDocumentRequest>,
) -> AppResult<impl IntoResponse> {
    let request = DocumentRequestRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PUT /api/document-requests/{id}
///
/// Update header fields only; topics and fields are never touched here.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDocumentRequest>,
) -> AppResult<StatusCode> {
    DocumentRequestRepo::update(&state.pool, id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/document-requests/{id}
///
/// Hard delete; topics, fields, and responses go with the request.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    DocumentRequestRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/form-responses` resource.
//!
//! Responses accumulate per (request, topic) pair; the `latest` view gives
//! clients the current answer for each topic of a request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::types::DbId;
use folio_db::models::form_response::{CreateFormResponse, UpdateFormResponse};
use folio_db::repositories::FormResponseRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/form-responses
///
/// List every stored response, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let responses = FormResponseRepo::list(&state.pool).await?;
    Ok(Json(responses))
}

/// GET /api/form-responses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let response = FormResponseRepo::get(&state.pool, id).await?;
    Ok(Json(response))
}

/// GET /api/form-responses/request/{request_id}
///
/// List the responses for one request with their topics, ordered by
/// category name then topic name.
pub async fn list_by_request(
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let responses = FormResponseRepo::list_by_request(&state.pool, request_id).await?;
    Ok(Json(responses))
}

/// GET /api/form-responses/request/{request_id}/latest
///
/// Same shape and order as `list_by_request`, reduced to the most recent
/// response per topic.
pub async fn latest_by_request(
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let responses = FormResponseRepo::latest_by_request(&state.pool, request_id).await?;
    Ok(Json(responses))
}

/// POST /api/form-responses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFormResponse>,
) -> AppResult<impl IntoResponse> {
    let response = FormResponseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/form-responses/batch
///
/// Insert a whole form submission in one transaction; either every
/// response persists or none do. Returns the rows in input order.
pub async fn create_batch(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateFormResponse>>,
) -> AppResult<impl IntoResponse> {
    let responses = FormResponseRepo::create_batch(&state.pool, &inputs).await?;
    Ok(Json(responses))
}

/// PUT /api/form-responses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFormResponse>,
) -> AppResult<StatusCode> {
    FormResponseRepo::update(&state.pool, id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/form-responses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    FormResponseRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

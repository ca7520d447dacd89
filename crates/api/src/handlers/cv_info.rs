//! Handlers for the `/cv-info` resource.
//!
//! The CV frontend maintains exactly one profile, so the collection GET
//! returns the first stored row instead of a list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::cv::{validate_bio, validate_cv_name, validate_cv_title};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::cv_info::{CreateCvInfo, UpdateCvInfo};
use folio_db::repositories::CvInfoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/cv-info
///
/// Return the first stored profile, or an empty 404 when none exists yet.
pub async fn get_first(State(state): State<AppState>) -> AppResult<Response> {
    match CvInfoRepo::find_first(&state.pool).await? {
        Some(info) => Ok(Json(info).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST /api/cv-info
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCvInfo>,
) -> AppResult<impl IntoResponse> {
    validate_cv_name(&input.name)?;
    validate_cv_title(&input.title)?;
    if let Some(bio) = &input.bio {
        validate_bio(bio)?;
    }

    let info = CvInfoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(info)))
}

/// PUT /api/cv-info/{id}
///
/// Full-entity update; the body id must match the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCvInfo>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Route id {id} does not match body id {}",
            input.id
        )));
    }
    validate_cv_name(&input.name)?;
    validate_cv_title(&input.title)?;
    if let Some(bio) = &input.bio {
        validate_bio(bio)?;
    }

    match CvInfoRepo::update(&state.pool, id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => match CvInfoRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "CvInfo {id} was modified concurrently"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "CvInfo",
                id,
            })),
        },
    }
}

/// DELETE /api/cv-info/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CvInfoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CvInfo",
            id,
        }))
    }
}

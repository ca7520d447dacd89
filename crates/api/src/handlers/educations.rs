//! Handlers for the `/educations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::cv::{validate_degree, validate_institution};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::education::{CreateEducation, UpdateEducation};
use folio_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/educations
///
/// List all education entries in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let educations = EducationRepo::list(&state.pool).await?;
    Ok(Json(educations))
}

/// POST /api/educations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<impl IntoResponse> {
    validate_institution(&input.institution)?;
    validate_degree(&input.degree)?;

    let education = EducationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(education)))
}

/// PUT /api/educations/{id}
///
/// Full-entity update; the body id must match the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEducation>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Route id {id} does not match body id {}",
            input.id
        )));
    }
    validate_institution(&input.institution)?;
    validate_degree(&input.degree)?;

    match EducationRepo::update(&state.pool, id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => match EducationRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "Education {id} was modified concurrently"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Education",
                id,
            })),
        },
    }
}

/// DELETE /api/educations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EducationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))
    }
}

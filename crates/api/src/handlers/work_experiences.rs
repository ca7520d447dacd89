//! Handlers for the `/work-experiences` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::cv::{validate_company, validate_experience_description, validate_position};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::work_experience::{CreateWorkExperience, UpdateWorkExperience};
use folio_db::repositories::WorkExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/work-experiences
///
/// List all work experiences in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let experiences = WorkExperienceRepo::list(&state.pool).await?;
    Ok(Json(experiences))
}

/// GET /api/work-experiences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let experience = WorkExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))?;
    Ok(Json(experience))
}

/// POST /api/work-experiences
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkExperience>,
) -> AppResult<impl IntoResponse> {
    validate_company(&input.company)?;
    validate_position(&input.position)?;
    validate_experience_description(&input.description)?;

    let experience = WorkExperienceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /api/work-experiences/{id}
///
/// Full-entity update; the body id must match the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkExperience>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Route id {id} does not match body id {}",
            input.id
        )));
    }
    validate_company(&input.company)?;
    validate_position(&input.position)?;
    validate_experience_description(&input.description)?;

    match WorkExperienceRepo::update(&state.pool, id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => match WorkExperienceRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "WorkExperience {id} was modified concurrently"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "WorkExperience",
                id,
            })),
        },
    }
}

/// DELETE /api/work-experiences/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WorkExperienceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))
    }
}

//! Handlers for the `/skills` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::cv::{validate_skill_category, validate_skill_name};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, UpdateSkill};
use folio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/skills
///
/// List all skills grouped by category, then display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// POST /api/skills
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    validate_skill_name(&input.name)?;
    validate_skill_category(&input.category)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/skills/{id}
///
/// Full-entity update; the body id must match the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Route id {id} does not match body id {}",
            input.id
        )));
    }
    validate_skill_name(&input.name)?;
    validate_skill_category(&input.category)?;

    match SkillRepo::update(&state.pool, id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => match SkillRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "Skill {id} was modified concurrently"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Skill",
                id,
            })),
        },
    }
}

/// DELETE /api/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
    }
}

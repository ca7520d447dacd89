//! Handlers for the `/projects` resource.
//!
//! Projects are plain CRUD rows; write bodies are validated here before
//! they reach the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::cv::{validate_project_description, validate_project_title};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects
///
/// List all projects in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_project_title(&input.title)?;
    validate_project_description(&input.description)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
///
/// Full-entity update; the body id must match the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "Route id {id} does not match body id {}",
            input.id
        )));
    }
    validate_project_title(&input.title)?;
    validate_project_description(&input.description)?;

    match ProjectRepo::update(&state.pool, id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => match ProjectRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "Project {id} was modified concurrently"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            })),
        },
    }
}

/// DELETE /api/projects/{id}
///
/// Fails with a store error while document requests still reference the
/// project (FK RESTRICT).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

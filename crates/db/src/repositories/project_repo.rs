//! Repository for the `projects` table.

use chrono::Utc;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, live_url, repository_url, image_url, \
    code_snippet, code_explanation, technologies, display_order, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, live_url, repository_url, image_url,
                code_snippet, code_explanation, technologies, display_order, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, COALESCE(?, 0), ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.live_url)
            .bind(&input.repository_url)
            .bind(&input.image_url)
            .bind(&input.code_snippet)
            .bind(&input.code_explanation)
            .bind(&input.technologies)
            .bind(input.display_order)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY display_order, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project from the full entity body and stamp `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = ?,
                description = ?,
                live_url = ?,
                repository_url = ?,
                image_url = ?,
                code_snippet = ?,
                code_explanation = ?,
                technologies = ?,
                display_order = ?,
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.live_url)
            .bind(&input.repository_url)
            .bind(&input.image_url)
            .bind(&input.code_snippet)
            .bind(&input.code_explanation)
            .bind(&input.technologies)
            .bind(input.display_order)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key error while any document request still
    /// references the project (ON DELETE RESTRICT).
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

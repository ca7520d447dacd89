//! Repository for the `work_experiences` table.

use chrono::Utc;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::work_experience::{CreateWorkExperience, UpdateWorkExperience, WorkExperience};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company, position, description, start_date, end_date, \
    is_current, project_name, project_id, display_order, created_at";

/// Provides CRUD operations for work experiences.
pub struct WorkExperienceRepo;

impl WorkExperienceRepo {
    /// Insert a new work experience, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateWorkExperience,
    ) -> Result<WorkExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experiences (company, position, description, start_date,
                end_date, is_current, project_name, project_id, display_order, created_at)
             VALUES (?, ?, ?, ?, ?, COALESCE(?, 0), ?, ?, COALESCE(?, 0), ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(&input.project_name)
            .bind(input.project_id)
            .bind(input.display_order)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a work experience by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experiences WHERE id = ?");
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all work experiences in display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<WorkExperience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experiences ORDER BY display_order, id");
        sqlx::query_as::<_, WorkExperience>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a work experience from the full entity body.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateWorkExperience,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!(
            "UPDATE work_experiences SET
                company = ?,
                position = ?,
                description = ?,
                start_date = ?,
                end_date = ?,
                is_current = ?,
                project_name = ?,
                project_id = ?,
                display_order = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(&input.project_name)
            .bind(input.project_id)
            .bind(input.display_order)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work experience by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_experiences WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

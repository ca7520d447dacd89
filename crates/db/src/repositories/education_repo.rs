//! Repository for the `educations` table.

use chrono::Utc;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, institution, degree, field_of_study, start_date, end_date, \
    description, display_order, created_at";

/// Provides CRUD operations for education records.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new education record, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateEducation,
    ) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO educations (institution, degree, field_of_study, start_date,
                end_date, description, display_order, created_at)
             VALUES (?, ?, ?, ?, ?, ?, COALESCE(?, 0), ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.display_order)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an education record by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM educations WHERE id = ?");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all education records in display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM educations ORDER BY display_order, id");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Replace an education record from the full entity body.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE educations SET
                institution = ?,
                degree = ?,
                field_of_study = ?,
                start_date = ?,
                end_date = ?,
                description = ?,
                display_order = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.display_order)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an education record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM educations WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

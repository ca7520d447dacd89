//! Repository for the `cv_infos` table.

use chrono::Utc;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::cv_info::{CreateCvInfo, CvInfo, UpdateCvInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, bio, email, linked_in_url, git_hub_url, \
    profile_image_url, created_at, updated_at";

/// Provides CRUD operations for the CV profile.
pub struct CvInfoRepo;

impl CvInfoRepo {
    /// Insert a new CV profile, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateCvInfo) -> Result<CvInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO cv_infos (name, title, bio, email, linked_in_url, git_hub_url,
                profile_image_url, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CvInfo>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.email)
            .bind(&input.linked_in_url)
            .bind(&input.git_hub_url)
            .bind(&input.profile_image_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a CV profile by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<CvInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cv_infos WHERE id = ?");
        sqlx::query_as::<_, CvInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return the first CV profile, if any. The read endpoint treats the
    /// table as a single-profile resource.
    pub async fn find_first(pool: &SqlitePool) -> Result<Option<CvInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cv_infos ORDER BY id LIMIT 1");
        sqlx::query_as::<_, CvInfo>(&query).fetch_optional(pool).await
    }

    /// Replace a CV profile from the full entity body and stamp `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCvInfo,
    ) -> Result<Option<CvInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE cv_infos SET
                name = ?,
                title = ?,
                bio = ?,
                email = ?,
                linked_in_url = ?,
                git_hub_url = ?,
                profile_image_url = ?,
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CvInfo>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.email)
            .bind(&input.linked_in_url)
            .bind(&input.git_hub_url)
            .bind(&input.profile_image_url)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a CV profile by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cv_infos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

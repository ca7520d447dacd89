//! Repository for the `skills` table.

use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::skill::{CreateSkill, Skill, UpdateSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, display_order";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, display_order)
             VALUES (?, ?, COALESCE(?, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = ?");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills grouped by category, then display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY category, display_order");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Replace a skill from the full entity body.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = ?,
                category = ?,
                display_order = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.display_order)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

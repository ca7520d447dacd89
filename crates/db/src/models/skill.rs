//! Skill entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub display_order: i64,
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i64>,
}

/// DTO for replacing a skill. Carries the full entity body; the embedded
/// id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkill {
    pub id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub display_order: i64,
}

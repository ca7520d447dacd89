//! Portfolio project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub live_url: Option<String>,
    pub repository_url: Option<String>,
    pub image_url: Option<String>,
    pub code_snippet: Option<String>,
    pub code_explanation: Option<String>,
    /// Comma-separated technology tags.
    pub technologies: Option<String>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub live_url: Option<String>,
    pub repository_url: Option<String>,
    pub image_url: Option<String>,
    pub code_snippet: Option<String>,
    pub code_explanation: Option<String>,
    pub technologies: Option<String>,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i64>,
}

/// DTO for replacing a project. Carries the full entity body; the
/// embedded id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub id: DbId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub live_url: Option<String>,
    pub repository_url: Option<String>,
    pub image_url: Option<String>,
    pub code_snippet: Option<String>,
    pub code_explanation: Option<String>,
    pub technologies: Option<String>,
    #[serde(default)]
    pub display_order: i64,
}

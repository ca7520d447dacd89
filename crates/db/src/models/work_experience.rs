//! Work experience entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `work_experiences` table.
///
/// `project_id` is a soft reference to a portfolio project (no foreign
/// key); `project_name` is free text and independent of it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: DbId,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub is_current: bool,
    pub project_name: Option<String>,
    pub project_id: Option<DbId>,
    pub display_order: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a work experience.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkExperience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    /// Defaults to false if omitted.
    pub is_current: Option<bool>,
    pub project_name: Option<String>,
    pub project_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i64>,
}

/// DTO for replacing a work experience. Carries the full entity body;
/// the embedded id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkExperience {
    pub id: DbId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub is_current: bool,
    pub project_name: Option<String>,
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub display_order: i64,
}

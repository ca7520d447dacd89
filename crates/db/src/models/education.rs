//! Education entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `educations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: DbId,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    pub display_order: i64,
    pub created_at: Timestamp,
}

/// DTO for creating an education record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducation {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i64>,
}

/// DTO for replacing an education record. Carries the full entity body;
/// the embedded id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducation {
    pub id: DbId,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i64,
}

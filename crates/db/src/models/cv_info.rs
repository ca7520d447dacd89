//! CV profile entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cv_infos` table. The API treats this as a
/// single-profile resource: reads return the first row.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvInfo {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a CV profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCvInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub profile_image_url: Option<String>,
}

/// DTO for replacing a CV profile. Carries the full entity body; the
/// embedded id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCvInfo {
    pub id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub linked_in_url: Option<String>,
    pub git_hub_url: Option<String>,
    pub profile_image_url: Option<String>,
}

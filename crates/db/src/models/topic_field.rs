//! Topic field requirement entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topic_fields` table. Owned by a request topic;
/// deleting the topic removes its fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicField {
    pub id: DbId,
    pub request_topic_id: DbId,
    pub field_name: String,
    pub field_type: String,
    pub is_required: bool,
    pub default_value: Option<String>,
    /// Serialized choice list for dropdown fields.
    pub options: Option<String>,
}

/// DTO for a field inside a nested topic create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicField {
    #[serde(default)]
    pub field_name: String,
    /// Defaults to "Text" if omitted.
    pub field_type: Option<String>,
    /// Defaults to false if omitted.
    pub is_required: Option<bool>,
    pub default_value: Option<String>,
    pub options: Option<String>,
}

//! Request topic entity model and DTOs.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::topic_field::{CreateTopicField, TopicField};

/// A row from the `request_topics` table. Owned by a document request;
/// deleting the request removes its topics.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTopic {
    pub id: DbId,
    pub document_request_id: DbId,
    pub category_name: String,
    pub topic_name: String,
    pub topic_label: String,
    pub description: String,
    pub priority: String,
    pub is_selected: bool,
    pub has_field_requirements: bool,
}

/// A request topic enriched with its field requirements.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTopicWithFields {
    #[serde(flatten)]
    pub topic: RequestTopic,
    pub fields: Vec<TopicField>,
}

/// DTO for a topic inside a nested document-request create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestTopic {
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub topic_name: String,
    #[serde(default)]
    pub topic_label: String,
    /// Defaults to the empty string if omitted.
    pub description: Option<String>,
    /// Defaults to "Priority" if omitted.
    pub priority: Option<String>,
    /// Defaults to false if omitted.
    pub is_selected: Option<bool>,
    /// Defaults to false if omitted.
    pub has_field_requirements: Option<bool>,
    #[serde(default)]
    pub fields: Vec<CreateTopicField>,
}

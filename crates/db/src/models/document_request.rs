//! Document request entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::request_topic::{CreateRequestTopic, RequestTopicWithFields};

/// A row from the `document_requests` table.
///
/// `project_name` is a snapshot taken when the request is created; it does
/// not follow later renames of the referenced project.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub project_name: String,
    pub status: String,
    pub created_at: Timestamp,
    pub sent_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// A document request enriched with its topics and their fields. This is
/// the shape every read endpoint returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequestWithTopics {
    #[serde(flatten)]
    pub request: DocumentRequest,
    pub topics: Vec<RequestTopicWithFields>,
}

/// DTO for creating a document request together with its topic tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub project_name: String,
    /// Defaults to "Draft" if omitted.
    pub status: Option<String>,
    pub sent_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub topics: Vec<CreateRequestTopic>,
}

/// DTO for replacing a document request header. Carries the full header
/// body; the embedded id must match the route id. Topics and fields are
/// not touched by updates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub id: DbId,
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub project_name: String,
    /// Defaults to "Draft" if omitted.
    pub status: Option<String>,
    pub sent_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::builder::RequestDraft;

    // The builder's submission payload must deserialize into the create DTO
    // without loss; the two types are the ends of the same wire format.
    #[test]
    fn builder_submission_matches_create_dto() {
        let submission = RequestDraft::new()
            .into_create_request(Some(4), "Acme Corp")
            .unwrap();
        let value = serde_json::to_value(&submission).unwrap();

        let input: CreateDocumentRequest = serde_json::from_value(value).unwrap();
        assert_eq!(input.project_id, Some(4));
        assert_eq!(input.project_name, "Acme Corp");
        assert_eq!(input.status.as_deref(), Some("Draft"));
        assert_eq!(input.topics.len(), 5);
        assert!(input.topics.iter().all(|t| t.is_selected == Some(true)));
        assert!(input.topics.iter().all(|t| t.fields.is_empty()));
    }

    #[test]
    fn create_dto_fills_missing_fields() {
        let input: CreateDocumentRequest = serde_json::from_value(serde_json::json!({
            "projectName": "Minimal"
        }))
        .unwrap();
        assert_eq!(input.project_id, None);
        assert_eq!(input.status, None);
        assert!(input.topics.is_empty());
    }
}

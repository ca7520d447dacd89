//! Form response entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::request_topic::RequestTopic;

/// A row from the `form_responses` table.
///
/// Responses accumulate: there is no uniqueness constraint on the
/// (document_request_id, request_topic_id) pair, and repeat submissions
/// insert new rows rather than overwriting.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: DbId,
    pub document_request_id: DbId,
    pub request_topic_id: DbId,
    pub response_text: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A form response enriched with the topic it answers, for per-request
/// review views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponseWithTopic {
    #[serde(flatten)]
    pub response: FormResponse,
    pub request_topic: RequestTopic,
}

/// DTO for creating a form response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormResponse {
    pub document_request_id: DbId,
    pub request_topic_id: DbId,
    /// Defaults to the empty string if omitted.
    pub response_text: Option<String>,
}

/// DTO for replacing a form response. Carries the full entity body; the
/// embedded id must match the route id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormResponse {
    pub id: DbId,
    pub document_request_id: DbId,
    pub request_topic_id: DbId,
    /// Defaults to the empty string if omitted.
    pub response_text: Option<String>,
}

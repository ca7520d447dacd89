//! Repository for the `document_requests` aggregate (header, topics, fields).

use chrono::Utc;
use folio_core::document_request::{
    validate_category_name, validate_field_name, validate_field_type, validate_priority,
    validate_project_name, validate_status, validate_topic_description, validate_topic_label,
    validate_topic_name,
};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::document_request::{
    CreateDocumentRequest, DocumentRequest, DocumentRequestWithTopics, UpdateDocumentRequest,
};
use crate::models::request_topic::{CreateRequestTopic, RequestTopic, RequestTopicWithFields};
use crate::models::topic_field::TopicField;

/// Column list for the `document_requests` table.
const COLUMNS: &str = "id, project_id, project_name, status, created_at, sent_at, completed_at";

/// Column list for the `request_topics` table.
const TOPIC_COLUMNS: &str = "id, document_request_id, category_name, topic_name, topic_label, \
    description, priority, is_selected, has_field_requirements";

/// Column list for the `topic_fields` table.
const FIELD_COLUMNS: &str =
    "id, request_topic_id, field_name, field_type, is_required, default_value, options";

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

/// Owns the document-request write contract: aggregate creation is
/// all-or-nothing, reads are always the full topic tree, and failures
/// carry an explicit NotFound / Conflict / Validation kind.
pub struct DocumentRequestRepo;

impl DocumentRequestRepo {
    /// Insert a request together with its topics and fields in one
    /// transaction, returning the persisted aggregate.
    ///
    /// The whole input is validated before anything is written; any
    /// failure mid-tree rolls the entire aggregate back.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDocumentRequest,
    ) -> Result<DocumentRequestWithTopics, CoreError> {
        Self::validate_create(input)?;

        let mut tx = pool.begin().await.map_err(store_error)?;

        let insert_query = format!(
            "INSERT INTO document_requests (project_id, project_name, status, created_at,
                sent_at, completed_at)
             VALUES (?, ?, COALESCE(?, 'Draft'), ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, DocumentRequest>(&insert_query)
            .bind(input.project_id)
            .bind(&input.project_name)
            .bind(&input.status)
            .bind(Utc::now())
            .bind(input.sent_at)
            .bind(input.completed_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(store_error)?;

        let topic_query = format!(
            "INSERT INTO request_topics (document_request_id, category_name, topic_name,
                topic_label, description, priority, is_selected, has_field_requirements)
             VALUES (?, ?, ?, ?, COALESCE(?, ''), COALESCE(?, 'Priority'), COALESCE(?, 0),
                COALESCE(?, 0))
             RETURNING {TOPIC_COLUMNS}"
        );
        let field_query = format!(
            "INSERT INTO topic_fields (request_topic_id, field_name, field_type, is_required,
                default_value, options)
             VALUES (?, ?, COALESCE(?, 'Text'), COALESCE(?, 0), ?, ?)
             RETURNING {FIELD_COLUMNS}"
        );

        let mut topics = Vec::with_capacity(input.topics.len());
        for topic_input in &input.topics {
            let topic = sqlx::query_as::<_, RequestTopic>(&topic_query)
                .bind(request.id)
                .bind(&topic_input.category_name)
                .bind(&topic_input.topic_name)
                .bind(&topic_input.topic_label)
                .bind(&topic_input.description)
                .bind(&topic_input.priority)
                .bind(topic_input.is_selected)
                .bind(topic_input.has_field_requirements)
                .fetch_one(&mut *tx)
                .await
                .map_err(store_error)?;

            let mut fields = Vec::with_capacity(topic_input.fields.len());
            for field_input in &topic_input.fields {
                let field = sqlx::query_as::<_, TopicField>(&field_query)
                    .bind(topic.id)
                    .bind(&field_input.field_name)
                    .bind(&field_input.field_type)
                    .bind(field_input.is_required)
                    .bind(&field_input.default_value)
                    .bind(&field_input.options)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(store_error)?;
                fields.push(field);
            }

            topics.push(RequestTopicWithFields { topic, fields });
        }

        tx.commit().await.map_err(store_error)?;
        Ok(DocumentRequestWithTopics { request, topics })
    }

    /// Fetch a request with its full topic tree.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<DocumentRequestWithTopics, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM document_requests WHERE id = ?");
        let request = sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(store_error)?
            .ok_or(CoreError::NotFound {
                entity: "DocumentRequest",
                id,
            })?;

        let topics = Self::topics_with_fields(pool, request.id).await?;
        Ok(DocumentRequestWithTopics { request, topics })
    }

    /// List all requests with their topic trees, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<DocumentRequestWithTopics>, CoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM document_requests ORDER BY created_at DESC, id DESC");
        let requests = sqlx::query_as::<_, DocumentRequest>(&query)
            .fetch_all(pool)
            .await
            .map_err(store_error)?;

        Self::with_topic_trees(pool, requests).await
    }

    /// List the requests referencing a project, newest first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<DocumentRequestWithTopics>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM document_requests WHERE project_id = ?
             ORDER BY created_at DESC, id DESC"
        );
        let requests = sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(store_error)?;

        Self::with_topic_trees(pool, requests).await
    }

    /// Replace the request header from the full header body. Topics and
    /// fields are never touched by updates, and `created_at` is immutable.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDocumentRequest,
    ) -> Result<DocumentRequest, CoreError> {
        if input.id != id {
            return Err(CoreError::Validation(format!(
                "Route id {id} does not match body id {}",
                input.id
            )));
        }
        validate_project_name(&input.project_name)?;
        if let Some(status) = &input.status {
            validate_status(status)?;
        }

        let query = format!(
            "UPDATE document_requests SET
                project_id = ?,
                project_name = ?,
                status = COALESCE(?, 'Draft'),
                sent_at = ?,
                completed_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, DocumentRequest>(&query)
            .bind(input.project_id)
            .bind(&input.project_name)
            .bind(&input.status)
            .bind(input.sent_at)
            .bind(input.completed_at)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(store_error)?;

        match updated {
            Some(request) => Ok(request),
            // Zero rows affected: distinguish a vanished row from one that
            // still exists but refused the write.
            None => {
                if Self::exists(pool, id).await? {
                    Err(CoreError::Conflict(format!(
                        "Document request {id} was modified concurrently"
                    )))
                } else {
                    Err(CoreError::NotFound {
                        entity: "DocumentRequest",
                        id,
                    })
                }
            }
        }
    }

    /// Delete a request. Topics, fields, and form responses go with it
    /// via cascading foreign keys.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM document_requests WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "DocumentRequest",
                id,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn validate_create(input: &CreateDocumentRequest) -> Result<(), CoreError> {
        validate_project_name(&input.project_name)?;
        if let Some(status) = &input.status {
            validate_status(status)?;
        }
        for topic in &input.topics {
            Self::validate_topic(topic)?;
        }
        Ok(())
    }

    fn validate_topic(topic: &CreateRequestTopic) -> Result<(), CoreError> {
        validate_category_name(&topic.category_name)?;
        validate_topic_name(&topic.topic_name)?;
        validate_topic_label(&topic.topic_label)?;
        if let Some(description) = &topic.description {
            validate_topic_description(description)?;
        }
        if let Some(priority) = &topic.priority {
            validate_priority(priority)?;
        }
        for field in &topic.fields {
            validate_field_name(&field.field_name)?;
            if let Some(field_type) = &field.field_type {
                validate_field_type(field_type)?;
            }
        }
        Ok(())
    }

    async fn with_topic_trees(
        pool: &SqlitePool,
        requests: Vec<DocumentRequest>,
    ) -> Result<Vec<DocumentRequestWithTopics>, CoreError> {
        let mut result = Vec::with_capacity(requests.len());
        for request in requests {
            let topics = Self::topics_with_fields(pool, request.id).await?;
            result.push(DocumentRequestWithTopics { request, topics });
        }
        Ok(result)
    }

    async fn topics_with_fields(
        pool: &SqlitePool,
        request_id: DbId,
    ) -> Result<Vec<RequestTopicWithFields>, CoreError> {
        let topic_query = format!(
            "SELECT {TOPIC_COLUMNS} FROM request_topics
             WHERE document_request_id = ? ORDER BY id"
        );
        let topics = sqlx::query_as::<_, RequestTopic>(&topic_query)
            .bind(request_id)
            .fetch_all(pool)
            .await
            .map_err(store_error)?;

        let field_query =
            format!("SELECT {FIELD_COLUMNS} FROM topic_fields WHERE request_topic_id = ? ORDER BY id");
        let mut result = Vec::with_capacity(topics.len());
        for topic in topics {
            let fields = sqlx::query_as::<_, TopicField>(&field_query)
                .bind(topic.id)
                .fetch_all(pool)
                .await
                .map_err(store_error)?;
            result.push(RequestTopicWithFields { topic, fields });
        }
        Ok(result)
    }

    async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, CoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM document_requests WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(store_error)
    }
}

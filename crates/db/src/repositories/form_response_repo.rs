//! Repository for the `form_responses` table.

use chrono::Utc;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::form_response::{
    CreateFormResponse, FormResponse, FormResponseWithTopic, UpdateFormResponse,
};
use crate::models::request_topic::RequestTopic;

/// Column list for the `form_responses` table.
const COLUMNS: &str =
    "id, document_request_id, request_topic_id, response_text, created_at, updated_at";

/// Column list for JOIN queries against `request_topics`.
const JOINED_COLUMNS: &str = "r.id, r.document_request_id, r.request_topic_id, \
    r.response_text, r.created_at, r.updated_at";

/// Column list for the `request_topics` table.
const TOPIC_COLUMNS: &str = "id, document_request_id, category_name, topic_name, topic_label, \
    description, priority, is_selected, has_field_requirements";

fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

/// Owns the form-response write contract. Responses are append-only per
/// (request, topic) pair: repeat submissions insert new rows, and the
/// per-topic "latest" view is resolved at read time.
pub struct FormResponseRepo;

impl FormResponseRepo {
    /// Insert a new response, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFormResponse,
    ) -> Result<FormResponse, CoreError> {
        let query = format!(
            "INSERT INTO form_responses (document_request_id, request_topic_id, response_text,
                created_at)
             VALUES (?, ?, COALESCE(?, ''), ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormResponse>(&query)
            .bind(input.document_request_id)
            .bind(input.request_topic_id)
            .bind(&input.response_text)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
            .map_err(store_error)
    }

    /// Insert a batch of responses in one transaction, returning them in
    /// input order. All rows share one `created_at` stamp; any failure
    /// persists nothing.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[CreateFormResponse],
    ) -> Result<Vec<FormResponse>, CoreError> {
        let query = format!(
            "INSERT INTO form_responses (document_request_id, request_topic_id, response_text,
                created_at)
             VALUES (?, ?, COALESCE(?, ''), ?)
             RETURNING {COLUMNS}"
        );
        let now = Utc::now();

        let mut tx = pool.begin().await.map_err(store_error)?;
        let mut responses = Vec::with_capacity(inputs.len());
        for input in inputs {
            let response = sqlx::query_as::<_, FormResponse>(&query)
                .bind(input.document_request_id)
                .bind(input.request_topic_id)
                .bind(&input.response_text)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(store_error)?;
            responses.push(response);
        }
        tx.commit().await.map_err(store_error)?;

        Ok(responses)
    }

    /// Fetch a response by ID.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<FormResponse, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM form_responses WHERE id = ?");
        sqlx::query_as::<_, FormResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(store_error)?
            .ok_or(CoreError::NotFound {
                entity: "FormResponse",
                id,
            })
    }

    /// List all responses, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<FormResponse>, CoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM form_responses ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, FormResponse>(&query)
            .fetch_all(pool)
            .await
            .map_err(store_error)
    }

    /// List every response for a request, each with its topic, ordered by
    /// (category_name, topic_name) ascending.
    pub async fn list_by_request(
        pool: &SqlitePool,
        request_id: DbId,
    ) -> Result<Vec<FormResponseWithTopic>, CoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM form_responses r
             JOIN request_topics t ON t.id = r.request_topic_id
             WHERE r.document_request_id = ?
             ORDER BY t.category_name, t.topic_name, r.id"
        );
        let responses = sqlx::query_as::<_, FormResponse>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
            .map_err(store_error)?;

        Self::with_topics(pool, responses).await
    }

    /// Like [`Self::list_by_request`], but keeping only the most recent
    /// response per topic.
    pub async fn latest_by_request(
        pool: &SqlitePool,
        request_id: DbId,
    ) -> Result<Vec<FormResponseWithTopic>, CoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM form_responses r
             JOIN request_topics t ON t.id = r.request_topic_id
             WHERE r.document_request_id = ?
               AND r.id = (SELECT r2.id FROM form_responses r2
                           WHERE r2.document_request_id = r.document_request_id
                             AND r2.request_topic_id = r.request_topic_id
                           ORDER BY r2.created_at DESC, r2.id DESC
                           LIMIT 1)
             ORDER BY t.category_name, t.topic_name"
        );
        let responses = sqlx::query_as::<_, FormResponse>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
            .map_err(store_error)?;

        Self::with_topics(pool, responses).await
    }

    /// Replace a response from the full entity body and stamp `updated_at`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateFormResponse,
    ) -> Result<FormResponse, CoreError> {
        if input.id != id {
            return Err(CoreError::Validation(format!(
                "Route id {id} does not match body id {}",
                input.id
            )));
        }

        let query = format!(
            "UPDATE form_responses SET
                document_request_id = ?,
                request_topic_id = ?,
                response_text = COALESCE(?, ''),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, FormResponse>(&query)
            .bind(input.document_request_id)
            .bind(input.request_topic_id)
            .bind(&input.response_text)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(store_error)?;

        match updated {
            Some(response) => Ok(response),
            None => {
                if Self::exists(pool, id).await? {
                    Err(CoreError::Conflict(format!(
                        "Form response {id} was modified concurrently"
                    )))
                } else {
                    Err(CoreError::NotFound {
                        entity: "FormResponse",
                        id,
                    })
                }
            }
        }
    }

    /// Delete a response by ID.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM form_responses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "FormResponse",
                id,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn with_topics(
        pool: &SqlitePool,
        responses: Vec<FormResponse>,
    ) -> Result<Vec<FormResponseWithTopic>, CoreError> {
        let topic_query = format!("SELECT {TOPIC_COLUMNS} FROM request_topics WHERE id = ?");
        let mut result = Vec::with_capacity(responses.len());
        for response in responses {
            let request_topic = sqlx::query_as::<_, RequestTopic>(&topic_query)
                .bind(response.request_topic_id)
                .fetch_one(pool)
                .await
                .map_err(store_error)?;
            result.push(FormResponseWithTopic {
                response,
                request_topic,
            });
        }
        Ok(result)
    }

    async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, CoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM form_responses WHERE id = ?)")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(store_error)
    }
}

//! Integration tests for the document-request aggregate repository:
//! - Nested create (header + topics + fields) and its atomicity
//! - Eager tree reads, newest-first list ordering
//! - Header update contract (id match, Conflict/NotFound split)
//! - Cascade delete and the project RESTRICT rule
//! - project_name snapshot semantics

use folio_core::error::CoreError;
use folio_db::models::document_request::{CreateDocumentRequest, UpdateDocumentRequest};
use folio_db::models::form_response::CreateFormResponse;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::request_topic::CreateRequestTopic;
use folio_db::models::topic_field::CreateTopicField;
use folio_db::repositories::{DocumentRequestRepo, FormResponseRepo, ProjectRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_request(project_id: Option<i64>, name: &str) -> CreateDocumentRequest {
    CreateDocumentRequest {
        project_id,
        project_name: name.to_string(),
        status: None,
        sent_at: None,
        completed_at: None,
        topics: Vec::new(),
    }
}

fn new_topic(category: &str, name: &str) -> CreateRequestTopic {
    CreateRequestTopic {
        category_name: category.to_string(),
        topic_name: name.to_string(),
        topic_label: name.to_string(),
        description: None,
        priority: None,
        is_selected: None,
        has_field_requirements: None,
        fields: Vec::new(),
    }
}

fn new_field(name: &str) -> CreateTopicField {
    CreateTopicField {
        field_name: name.to_string(),
        field_type: None,
        is_required: None,
        default_value: None,
        options: None,
    }
}

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: "A portfolio project".to_string(),
        live_url: None,
        repository_url: None,
        image_url: None,
        code_snippet: None,
        code_explanation: None,
        technologies: None,
        display_order: None,
    }
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Test: Nested create returns the full persisted tree
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nested_create_returns_full_tree(pool: SqlitePool) {
    let mut input = new_request(None, "Acme Corp");
    let mut hr_topic = new_topic("Human Resources", "Personnel Data");
    hr_topic.fields = vec![new_field("Employee Count"), new_field("Payroll Total")];
    hr_topic.priority = Some("Tier 1".to_string());
    hr_topic.is_selected = Some(true);
    hr_topic.has_field_requirements = Some(true);
    input.topics = vec![hr_topic, new_topic("Financial Reports", "FY25 Plan")];

    let created = DocumentRequestRepo::create(&pool, &input).await.unwrap();

    assert!(created.request.id > 0);
    assert_eq!(created.request.project_name, "Acme Corp");
    assert_eq!(created.request.status, "Draft"); // default
    assert_eq!(created.request.project_id, None);
    assert_eq!(created.topics.len(), 2);

    let hr = &created.topics[0];
    assert!(hr.topic.id > 0);
    assert_eq!(hr.topic.document_request_id, created.request.id);
    assert_eq!(hr.topic.category_name, "Human Resources");
    assert_eq!(hr.topic.priority, "Tier 1");
    assert!(hr.topic.is_selected);
    assert_eq!(hr.fields.len(), 2);
    assert_eq!(hr.fields[0].field_name, "Employee Count");
    assert_eq!(hr.fields[0].field_type, "Text"); // default
    assert!(!hr.fields[0].is_required); // default
    assert_eq!(hr.fields[0].request_topic_id, hr.topic.id);

    let fin = &created.topics[1];
    assert_eq!(fin.topic.priority, "Priority"); // default
    assert!(!fin.topic.is_selected); // default
    assert!(fin.fields.is_empty());

    // All generated ids are distinct.
    assert_ne!(hr.topic.id, fin.topic.id);
    assert_ne!(hr.fields[0].id, hr.fields[1].id);

    // Reading back returns the same tree.
    let fetched = DocumentRequestRepo::get(&pool, created.request.id)
        .await
        .unwrap();
    assert_eq!(fetched.topics.len(), 2);
    assert_eq!(fetched.topics[0].fields.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Invalid input persists nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_invalid_topic_persists_nothing(pool: SqlitePool) {
    let mut input = new_request(None, "Acme Corp");
    input.topics = vec![new_topic("General", "Valid"), new_topic("", "No Category")];

    let result = DocumentRequestRepo::create(&pool, &input).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    assert_eq!(count(&pool, "document_requests").await, 0);
    assert_eq!(count(&pool, "request_topics").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_project_persists_nothing(pool: SqlitePool) {
    let mut input = new_request(Some(999_999), "Ghost Project");
    input.topics = vec![new_topic("General", "Personnel Data")];

    let result = DocumentRequestRepo::create(&pool, &input).await;
    assert!(
        matches!(result, Err(CoreError::Internal(_))),
        "FK violation should surface as a store fault"
    );

    assert_eq!(count(&pool, "document_requests").await, 0);
    assert_eq!(count(&pool, "request_topics").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_empty_project_name(pool: SqlitePool) {
    let result = DocumentRequestRepo::create(&pool, &new_request(None, "")).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

// ---------------------------------------------------------------------------
// Test: Get missing id is NotFound
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_is_not_found(pool: SqlitePool) {
    let result = DocumentRequestRepo::get(&pool, 999_999).await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

// ---------------------------------------------------------------------------
// Test: List is newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first(pool: SqlitePool) {
    let first = DocumentRequestRepo::create(&pool, &new_request(None, "First"))
        .await
        .unwrap();
    let second = DocumentRequestRepo::create(&pool, &new_request(None, "Second"))
        .await
        .unwrap();
    let third = DocumentRequestRepo::create(&pool, &new_request(None, "Third"))
        .await
        .unwrap();

    let requests = DocumentRequestRepo::list(&pool).await.unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].request.id, third.request.id);
    assert_eq!(requests[1].request.id, second.request.id);
    assert_eq!(requests[2].request.id, first.request.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_scoped(pool: SqlitePool) {
    let p1 = ProjectRepo::create(&pool, &new_project("P1")).await.unwrap();
    let p2 = ProjectRepo::create(&pool, &new_project("P2")).await.unwrap();

    DocumentRequestRepo::create(&pool, &new_request(Some(p1.id), "R1"))
        .await
        .unwrap();
    DocumentRequestRepo::create(&pool, &new_request(Some(p1.id), "R2"))
        .await
        .unwrap();
    DocumentRequestRepo::create(&pool, &new_request(Some(p2.id), "R3"))
        .await
        .unwrap();
    DocumentRequestRepo::create(&pool, &new_request(None, "R4"))
        .await
        .unwrap();

    let p1_requests = DocumentRequestRepo::list_by_project(&pool, p1.id).await.unwrap();
    assert_eq!(p1_requests.len(), 2);
    assert_eq!(p1_requests[0].request.project_name, "R2");
    assert_eq!(p1_requests[1].request.project_name, "R1");

    let p2_requests = DocumentRequestRepo::list_by_project(&pool, p2.id).await.unwrap();
    assert_eq!(p2_requests.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Header update contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_header_only(pool: SqlitePool) {
    let mut input = new_request(None, "Before");
    input.topics = vec![new_topic("General", "Personnel Data")];
    let created = DocumentRequestRepo::create(&pool, &input).await.unwrap();

    let updated = DocumentRequestRepo::update(
        &pool,
        created.request.id,
        &UpdateDocumentRequest {
            id: created.request.id,
            project_id: None,
            project_name: "After".to_string(),
            status: Some("Sent".to_string()),
            sent_at: Some(chrono::Utc::now()),
            completed_at: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.project_name, "After");
    assert_eq!(updated.status, "Sent");
    assert!(updated.sent_at.is_some());
    assert_eq!(updated.created_at, created.request.created_at);

    // Topics are untouched by header updates.
    let fetched = DocumentRequestRepo::get(&pool, created.request.id)
        .await
        .unwrap();
    assert_eq!(fetched.topics.len(), 1);
    assert_eq!(fetched.topics[0].topic.topic_name, "Personnel Data");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_id_mismatch_never_mutates(pool: SqlitePool) {
    let created = DocumentRequestRepo::create(&pool, &new_request(None, "Original"))
        .await
        .unwrap();

    let result = DocumentRequestRepo::update(
        &pool,
        created.request.id,
        &UpdateDocumentRequest {
            id: created.request.id + 1,
            project_id: None,
            project_name: "Hijacked".to_string(),
            status: None,
            sent_at: None,
            completed_at: None,
        },
    )
    .await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    let fetched = DocumentRequestRepo::get(&pool, created.request.id)
        .await
        .unwrap();
    assert_eq!(fetched.request.project_name, "Original");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_is_not_found(pool: SqlitePool) {
    let result = DocumentRequestRepo::update(
        &pool,
        999_999,
        &UpdateDocumentRequest {
            id: 999_999,
            project_id: None,
            project_name: "Ghost".to_string(),
            status: None,
            sent_at: None,
            completed_at: None,
        },
    )
    .await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

// ---------------------------------------------------------------------------
// Test: Delete cascades through topics, fields, and responses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades(pool: SqlitePool) {
    let mut input = new_request(None, "Cascade");
    let mut topic = new_topic("General", "Personnel Data");
    topic.fields = vec![new_field("Employee Count")];
    input.topics = vec![topic];
    let created = DocumentRequestRepo::create(&pool, &input).await.unwrap();

    FormResponseRepo::create(
        &pool,
        &CreateFormResponse {
            document_request_id: created.request.id,
            request_topic_id: created.topics[0].topic.id,
            response_text: Some("42".to_string()),
        },
    )
    .await
    .unwrap();

    DocumentRequestRepo::delete(&pool, created.request.id)
        .await
        .unwrap();

    assert_eq!(count(&pool, "document_requests").await, 0);
    assert_eq!(count(&pool, "request_topics").await, 0);
    assert_eq!(count(&pool, "topic_fields").await, 0);
    assert_eq!(count(&pool, "form_responses").await, 0);

    let result = DocumentRequestRepo::delete(&pool, created.request.id).await;
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

// ---------------------------------------------------------------------------
// Test: Project delete is restricted while referenced
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_restricted_while_referenced(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Referenced"))
        .await
        .unwrap();
    let request = DocumentRequestRepo::create(&pool, &new_request(Some(project.id), "Holder"))
        .await
        .unwrap();

    let result = ProjectRepo::delete(&pool, project.id).await;
    assert!(result.is_err(), "RESTRICT should block the project delete");

    // Once the request is gone the project can be deleted.
    DocumentRequestRepo::delete(&pool, request.request.id)
        .await
        .unwrap();
    let deleted = ProjectRepo::delete(&pool, project.id).await.unwrap();
    assert!(deleted);
}

// ---------------------------------------------------------------------------
// Test: project_name is a snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_name_is_a_snapshot(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Original Title"))
        .await
        .unwrap();
    let request =
        DocumentRequestRepo::create(&pool, &new_request(Some(project.id), "Original Title"))
            .await
            .unwrap();

    ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            id: project.id,
            title: "Renamed Title".to_string(),
            description: "A portfolio project".to_string(),
            live_url: None,
            repository_url: None,
            image_url: None,
            code_snippet: None,
            code_explanation: None,
            technologies: None,
            display_order: 0,
        },
    )
    .await
    .unwrap()
    .expect("project should update");

    let fetched = DocumentRequestRepo::get(&pool, request.request.id)
        .await
        .unwrap();
    assert_eq!(fetched.request.project_name, "Original Title");
}

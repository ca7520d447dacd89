pub mod cv_info;
pub mod document_requests;
pub mod educations;
pub mod form_responses;
pub mod health;
pub mod projects;
pub mod skills;
pub mod work_experiences;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /document-requests                           list, create
/// /document-requests/{id}                      get, update, delete
/// /document-requests/project/{project_id}      list for one project
///
/// /form-responses                              list, create
/// /form-responses/batch                        create many (POST)
/// /form-responses/{id}                         get, update, delete
/// /form-responses/request/{request_id}         list for one request
/// /form-responses/request/{request_id}/latest  latest response per topic
///
/// /projects                                    list, create
/// /projects/{id}                               get, update, delete
///
/// /cv-info                                     get first profile, create
/// /cv-info/{id}                                update, delete
///
/// /work-experiences                            list, create
/// /work-experiences/{id}                       get, update, delete
///
/// /skills                                      list, create
/// /skills/{id}                                 update, delete
///
/// /educations                                  list, create
/// /educations/{id}                             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Document-request workflow (nested aggregate root).
        .nest("/document-requests", document_requests::router())
        // Submitted form responses, append-only per topic.
        .nest("/form-responses", form_responses::router())
        // Portfolio projects.
        .nest("/projects", projects::router())
        // Single-profile CV header.
        .nest("/cv-info", cv_info::router())
        // CV work history.
        .nest("/work-experiences", work_experiences::router())
        // CV skills.
        .nest("/skills", skills::router())
        // CV education history.
        .nest("/educations", educations::router())
}

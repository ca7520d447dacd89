//! Route definitions for document requests.

use axum::routing::get;
use axum::Router;

use crate::handlers::document_requests;
use crate::state::AppState;

/// Routes mounted at `/document-requests`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /project/{project_id}   -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(document_requests::list).post(document_requests::create),
        )
        .route(
            "/{id}",
            get(document_requests::get_by_id)
                .put(document_requests::update)
                .delete(document_requests::delete),
        )
        .route(
            "/project/{project_id}",
            get(document_requests::list_by_project),
        )
}

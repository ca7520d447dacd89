//! Route definitions for form responses.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::form_responses;
use crate::state::AppState;

/// Routes mounted at `/form-responses`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// POST   /batch                        -> create_batch
/// GET    /{id}                         -> get_by_id
/// PUT    /{id}                         -> update
/// DELETE /{id}                         -> delete
/// GET    /request/{request_id}         -> list_by_request
/// GET    /request/{request_id}/latest  -> latest_by_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form_responses::list).post(form_responses::create))
        .route("/batch", post(form_responses::create_batch))
        .route(
            "/{id}",
            get(form_responses::get_by_id)
                .put(form_responses::update)
                .delete(form_responses::delete),
        )
        .route(
            "/request/{request_id}",
            get(form_responses::list_by_request),
        )
        .route(
            "/request/{request_id}/latest",
            get(form_responses::latest_by_request),
        )
}

//! Route definitions for work experiences.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_experiences;
use crate::state::AppState;

/// Routes mounted at `/work-experiences`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work_experiences::list).post(work_experiences::create))
        .route(
            "/{id}",
            get(work_experiences::get_by_id)
                .put(work_experiences::update)
                .delete(work_experiences::delete),
        )
}

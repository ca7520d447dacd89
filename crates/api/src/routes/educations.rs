//! Route definitions for education history.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::educations;
use crate::state::AppState;

/// Routes mounted at `/educations`.
///
/// Education entries are only ever rendered as a list, so there is no
/// single-item GET.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(educations::list).post(educations::create))
        .route("/{id}", put(educations::update).delete(educations::delete))
}
